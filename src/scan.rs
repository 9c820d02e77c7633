//! Lazy JPEG discovery under a root directory

use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

/// File name suffixes treated as JPEG, compared case-insensitively
const JPEG_SUFFIXES: &[&str] = &[".jpg", ".jpeg"];

/// Check if a path names a JPEG file by the end of its file name.
///
/// Dot-files such as `.jpg` count too, which `Path::extension` would miss.
pub fn is_jpeg_path(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            let name = name.to_lowercase();
            JPEG_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
        })
}

/// Iterator over every JPEG file below a root directory.
///
/// Paths are produced one at a time in traversal order. A traversal error
/// is yielded as `Err` and the caller is expected to stop there.
pub struct JpegFiles {
    walker: walkdir::IntoIter,
}

impl JpegFiles {
    /// Start walking `root`, which must be an existing directory
    pub fn new(root: &Path, follow_links: bool) -> Result<Self> {
        let metadata = fs::metadata(root).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::RootNotFound {
                path: root.to_path_buf(),
            },
            _ => Error::Io(e),
        })?;

        if !metadata.is_dir() {
            return Err(Error::RootNotDirectory {
                path: root.to_path_buf(),
            });
        }

        let walker = WalkDir::new(root).follow_links(follow_links).into_iter();
        Ok(Self { walker })
    }
}

impl Iterator for JpegFiles {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(Error::WalkDir(e))),
            };

            if entry.file_type().is_dir() {
                continue;
            }

            // Without link following, a link to a directory is not reported as one
            if entry.path_is_symlink() && entry.path().is_dir() {
                trace!(path = ?entry.path(), "Skipping link to directory");
                continue;
            }

            if is_jpeg_path(entry.path()) {
                trace!(path = ?entry.path(), "Found JPEG candidate");
                return Some(Ok(entry.into_path()));
            }
        }
    }
}
