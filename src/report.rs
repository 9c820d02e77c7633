//! Output of matching files or folders
//!
//! Every line goes to the console. When an output file was requested the
//! same line is mirrored there, so both writes for one match complete
//! before the next match is handled.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// How matches are turned into lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// One line per matching folder instead of per file
    pub only_folders: bool,
    /// Prefix lines with `"<date>: "`
    pub include_date: Option<NaiveDate>,
}

/// Counts gathered while reporting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Lines written
    pub lines: usize,
    /// Matches suppressed because their folder was already reported
    pub folder_repeats: usize,
}

/// Writes match lines to the console and an optional mirror sink
pub struct Reporter<C: Write, S: Write = BufWriter<File>> {
    console: C,
    sink: Option<S>,
    options: ReportOptions,
    seen_folders: HashSet<String>,
    summary: ReportSummary,
}

/// Open the mirror file in truncate/write mode
pub fn open_sink(path: &Path) -> Result<BufWriter<File>> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|source| Error::OutputOpen {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(BufWriter::new(file))
}

impl<C: Write, S: Write> Reporter<C, S> {
    pub fn new(console: C, sink: Option<S>, options: ReportOptions) -> Self {
        Self {
            console,
            sink,
            options,
            seen_folders: HashSet::new(),
            summary: ReportSummary::default(),
        }
    }

    /// Report one matching file.
    ///
    /// Returns the line written, or `None` when folder mode already
    /// reported this file's folder.
    pub fn emit(&mut self, file: &Path) -> Result<Option<String>> {
        let subject = if self.options.only_folders {
            let folder = parent_folder(file);
            if !self.seen_folders.insert(folder.clone()) {
                debug!(%folder, "Folder already reported");
                self.summary.folder_repeats += 1;
                return Ok(None);
            }
            folder
        } else {
            file.display().to_string()
        };

        let line = match self.options.include_date {
            Some(date) => format!("{}: {}", date.format("%Y-%m-%d"), subject),
            None => subject,
        };

        writeln!(self.console, "{}", line)?;
        if let Some(sink) = self.sink.as_mut() {
            writeln!(sink, "{}", line)?;
        }

        self.summary.lines += 1;
        Ok(Some(line))
    }

    /// Write a diagnostic line to the console only
    pub fn note(&mut self, text: &str) -> Result<()> {
        writeln!(self.console, "{}", text)?;
        Ok(())
    }

    /// Flush everything and close the mirror sink
    pub fn finish(mut self) -> Result<ReportSummary> {
        self.console.flush()?;
        if let Some(mut sink) = self.sink.take() {
            sink.flush()?;
            debug!("Output file closed");
        }
        Ok(self.summary)
    }
}

/// Parent directory of `file` as printed in folder mode
fn parent_folder(file: &Path) -> String {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.display().to_string(),
        _ => ".".to_string(),
    }
}
