//! Calendar-date comparison for raw EXIF date strings

use crate::error::{Error, Result};
use chrono::NaiveDate;

/// ISO calendar date format used for `--date` and for normalized EXIF dates
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Extract the calendar date from a raw EXIF date string.
///
/// EXIF stores dates as `"YYYY:MM:DD HH:MM:SS"`. Only the first whitespace
/// separated token is considered, its `:` separators become `-`, and the
/// result must be a strict `YYYY-MM-DD` date. Anything else yields `None`.
pub fn capture_date(raw: &str) -> Option<NaiveDate> {
    let token = raw.split_whitespace().next()?;
    let normalized = token.replace(':', "-");
    parse_iso_date(&normalized)
}

/// Check whether a raw EXIF date falls on `target`, ignoring time of day
pub fn matches_date(raw: &str, target: NaiveDate) -> bool {
    capture_date(raw) == Some(target)
}

/// Parse the target date given on the command line
pub fn parse_target_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if !is_iso_shape(trimmed) {
        return Err(Error::InvalidDate {
            input: input.to_string(),
            message: "date must have the form YYYY-MM-DD".to_string(),
        });
    }

    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT).map_err(|e| Error::InvalidDate {
        input: input.to_string(),
        message: e.to_string(),
    })
}

fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    if !is_iso_shape(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, ISO_DATE_FORMAT).ok()
}

/// `%Y-%m-%d` alone accepts signs and short fields, so check the exact
/// `DDDD-DD-DD` layout first.
fn is_iso_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
