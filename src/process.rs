//! Scan pipeline: enumerate, read EXIF date, match, report
//!
//! Each JPEG is fully handled before the next one is enumerated, so
//! output follows traversal order.

use crate::config::ScanRequest;
use crate::error::Result;
use crate::report::{ReportOptions, Reporter, open_sink};
use crate::scan::JpegFiles;
use crate::time::exif::read_capture_date;
use crate::time::matcher::matches_date;
use std::io::{self, Write};
use tracing::{Level, debug, info, span};

/// Counters for one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// JPEG files checked
    pub scanned: usize,
    /// Files that had a capture date
    pub with_date: usize,
    /// Files whose capture date equals the target date
    pub matched: usize,
    /// Lines written to the output
    pub emitted: usize,
    /// Matches not printed because their folder was already reported
    pub folder_repeats: usize,
}

impl ScanStats {
    pub fn summary(&self) -> String {
        format!(
            "Scanned: {}, With date: {}, Matched: {}, Emitted: {}, Folder repeats: {}",
            self.scanned, self.with_date, self.matched, self.emitted, self.folder_repeats
        )
    }
}

/// Runs one scan described by a [`ScanRequest`]
pub struct Finder {
    request: ScanRequest,
}

impl Finder {
    pub fn new(request: ScanRequest) -> Self {
        Self { request }
    }

    /// Run the scan, printing results to stdout
    pub fn run(&self) -> Result<ScanStats> {
        let stdout = io::stdout();
        self.run_with(stdout.lock())
    }

    /// Run the scan, printing results (and verbose lines) to `console`.
    ///
    /// A missing root or an unwritable output file fails before anything is
    /// printed. A traversal error mid-scan aborts the scan; an unreadable
    /// image never does.
    pub fn run_with<W: Write>(&self, mut console: W) -> Result<ScanStats> {
        let request = &self.request;
        let _span = span!(Level::INFO, "scan", root = %request.root.display()).entered();

        let files = JpegFiles::new(&request.root, request.follow_links)?;
        let sink = request.output.as_deref().map(open_sink).transpose()?;

        info!(
            target_date = %request.target_date,
            only_folders = request.only_folders,
            "Scanning for JPEG files"
        );

        let options = ReportOptions {
            only_folders: request.only_folders,
            include_date: request.include_date.then_some(request.target_date),
        };
        let mut stats = ScanStats::default();

        let mut reporter = Reporter::new(&mut console, sink, options);

        for file in files {
            let file = file?;
            stats.scanned += 1;

            if request.verbose {
                reporter.note(&format!("Checking {}", file.display()))?;
            }

            let raw_date = read_capture_date(&file, &request.date_tags);

            if request.verbose {
                reporter.note(&format!(
                    "  EXIF date: {}",
                    raw_date.as_deref().unwrap_or("None")
                ))?;
            }

            let Some(raw_date) = raw_date else {
                continue;
            };
            stats.with_date += 1;

            if !matches_date(&raw_date, request.target_date) {
                continue;
            }
            stats.matched += 1;
            debug!(path = ?file, %raw_date, "Date matches");

            reporter.emit(&file)?;
        }

        let report = reporter.finish()?;
        stats.emitted = report.lines;
        stats.folder_repeats = report.folder_repeats;
        info!("{}", stats.summary());

        Ok(stats)
    }
}
