//! EXIF capture-date extraction for JPEG images

use exif::{Exif, Field, In, Reader, Tag, Value};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, trace};

/// EXIF date fields that can carry a capture date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateTag {
    /// When the original image was taken
    DateTimeOriginal,
    /// When the image was digitized (`DateTimeDigitized` in the EXIF standard)
    CreateDate,
    /// Last modification of the file (`DateTime` in the EXIF standard)
    ModifyDate,
}

impl DateTag {
    /// The kamadak-exif tag this field is stored under
    pub fn exif_tag(self) -> Tag {
        match self {
            DateTag::DateTimeOriginal => Tag::DateTimeOriginal,
            DateTag::CreateDate => Tag::DateTimeDigitized,
            DateTag::ModifyDate => Tag::DateTime,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DateTag::DateTimeOriginal => "DateTimeOriginal",
            DateTag::CreateDate => "CreateDate",
            DateTag::ModifyDate => "ModifyDate",
        }
    }
}

/// Tags tried when the configuration does not say otherwise, in priority order
pub const DEFAULT_DATE_TAGS: &[DateTag] = &[DateTag::DateTimeOriginal, DateTag::CreateDate];

/// Reasons an image yields no EXIF block. Never leaves this module.
#[derive(Debug, Error)]
enum ReadFailure {
    #[error("cannot open file: {0}")]
    Open(#[from] std::io::Error),

    #[error("cannot parse EXIF container: {0}")]
    Container(#[from] exif::Error),
}

/// Read the raw capture date of an image.
///
/// Tags are tried in the given order and the first non-empty value wins.
/// The value is returned as stored, typically `"YYYY:MM:DD HH:MM:SS"`.
///
/// A file that cannot be opened, is not a valid image, or has none of the
/// tags yields `None`. One bad file must not stop a scan, so these failures
/// are only logged.
pub fn read_capture_date(path: &Path, tags: &[DateTag]) -> Option<String> {
    let exif = match read_exif(path) {
        Ok(exif) => exif,
        Err(e) => {
            debug!(?path, error = %e, "No readable EXIF data");
            return None;
        }
    };

    let found = tags.iter().find_map(|tag| {
        let field = exif.get_field(tag.exif_tag(), In::PRIMARY)?;
        let value = field_text(field)?;
        trace!(?path, tag = tag.name(), %value, "Found EXIF date");
        Some(value)
    });

    if found.is_none() {
        debug!(?path, "No date tag found in EXIF data");
    }
    found
}

fn read_exif(path: &Path) -> std::result::Result<Exif, ReadFailure> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    Ok(Reader::new().read_from_container(&mut reader)?)
}

/// First non-empty string held by a field
fn field_text(field: &Field) -> Option<String> {
    match &field.value {
        Value::Ascii(values) => values
            .iter()
            .map(|bytes| {
                String::from_utf8_lossy(bytes)
                    .trim_end_matches('\0')
                    .trim()
                    .to_string()
            })
            .find(|s| !s.is_empty()),
        _ => {
            let text = field.display_value().to_string();
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        }
    }
}
