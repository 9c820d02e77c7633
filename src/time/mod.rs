//! Capture-date handling
//!
//! - [`exif`] reads the raw date string stored in a JPEG's EXIF block
//! - [`matcher`] reduces that string to a calendar date and compares it

pub mod exif;
pub mod matcher;

pub use self::exif::{DEFAULT_DATE_TAGS, DateTag, read_capture_date};
pub use self::matcher::{capture_date, matches_date, parse_target_date};
