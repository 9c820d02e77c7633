//! EXIF Date Finder - find JPEG photos by capture date
//!
//! This library provides the pieces of a single-pass scan:
//! - Lazy JPEG discovery under a root directory
//! - EXIF capture-date extraction that never aborts on a bad file
//! - Calendar-date matching against a target date
//! - Per-file or per-folder reporting to the console and an optional file

pub mod cli;
pub mod config;
pub mod error;
pub mod process;
pub mod report;
pub mod scan;
pub mod time;

#[cfg(test)]
mod testutil;

pub use cli::Cli;
pub use config::{Config, ConfigError, ScanRequest};
pub use error::{Error, Result};
pub use process::{Finder, ScanStats};
pub use report::{ReportOptions, ReportSummary, Reporter};
pub use scan::JpegFiles;
