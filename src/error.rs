//! Error types for the EXIF date finder

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for finder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the EXIF date finder
///
/// Every variant here is fatal for a run. Per-file EXIF failures never
/// become an `Error`; they are reported as a missing date instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory traversal error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Root directory does not exist: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("Root path is not a directory: {}", path.display())]
    RootNotDirectory { path: PathBuf },

    #[error("Invalid date '{input}' (expected YYYY-MM-DD): {message}")]
    InvalidDate { input: String, message: String },

    #[error("Failed to open output file {}: {source}", path.display())]
    OutputOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
