//! CLI argument parsing with clap

use crate::config::{Config, ScanRequest};
use crate::error::Result;
use crate::time::matcher::parse_target_date;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// EXIF Date Finder - find JPEG photos taken on a given date
///
/// Walks a directory tree, reads the EXIF capture date of every JPEG
/// and prints the files (or folders) whose date matches.
#[derive(Parser, Debug)]
#[command(name = "exif-finder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory to search
    #[arg(long)]
    pub path: PathBuf,

    /// Date to match in format YYYY-MM-DD
    #[arg(long, value_parser = parse_date_arg)]
    pub date: NaiveDate,

    /// Optional file to write results to (UTF-8, truncated first)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show every processed file and its EXIF date
    #[arg(short, long)]
    pub verbose: bool,

    /// Output only folders of matches, without duplicates
    #[arg(long)]
    pub only_folders: bool,

    /// Prefix every output line with the matched date
    #[arg(long)]
    pub include_date: bool,

    /// Path to configuration file (TOML format)
    ///
    /// Settings from the file are used as defaults; CLI flags override them.
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Also write diagnostics to this log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Write the log file as JSON lines
    #[arg(long, requires = "log_file")]
    pub json_log: bool,
}

fn parse_date_arg(s: &str) -> std::result::Result<NaiveDate, String> {
    parse_target_date(s).map_err(|e| e.to_string())
}

impl Cli {
    /// Merge CLI arguments with config from file.
    /// CLI arguments take precedence over config file settings
    pub fn merge_with_config(&self, mut config: Config) -> Config {
        if let Some(ref output) = self.output {
            config.output = Some(output.clone());
        }
        if self.verbose {
            config.verbose = true;
        }
        if self.only_folders {
            config.only_folders = true;
        }
        if self.include_date {
            config.include_date = true;
        }
        config
    }

    /// Build the scan request, reading the config file if one was given
    pub fn to_request(&self) -> Result<ScanRequest> {
        let config = match self.config {
            Some(ref path) => Config::load_from_file(path)?,
            None => Config::default(),
        };
        let config = self.merge_with_config(config);
        Ok(ScanRequest::from_config(self.path.clone(), self.date, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::time::exif::DateTag;
    use std::fs;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("exif-finder").chain(args.iter().copied()))
    }

    #[test]
    fn test_required_arguments() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["--path", "photos"]).is_err());
        assert!(parse(&["--date", "2023-04-01"]).is_err());

        let cli = parse(&["--path", "photos", "--date", "2023-04-01"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("photos"));
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2023, 4, 1).unwrap());
        assert!(cli.output.is_none());
        assert!(!cli.verbose && !cli.only_folders && !cli.include_date);
    }

    #[test]
    fn test_invalid_date_rejected() {
        for bad in ["2023/04/01", "2023-13-01", "April 1st"] {
            assert!(parse(&["--path", "photos", "--date", bad]).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_all_flags() {
        let cli = parse(&[
            "--path",
            "photos",
            "--date",
            "2023-04-01",
            "--output",
            "out.txt",
            "--verbose",
            "--only-folders",
            "--include-date",
        ])
        .unwrap();

        let request = cli.to_request().unwrap();
        assert_eq!(request.output, Some(PathBuf::from("out.txt")));
        assert!(request.verbose);
        assert!(request.only_folders);
        assert!(request.include_date);
        assert_eq!(request.date_tags, vec![DateTag::DateTimeOriginal, DateTag::CreateDate]);
    }

    #[test]
    fn test_json_log_requires_log_file() {
        assert!(parse(&["--path", "p", "--date", "2023-04-01", "--json-log"]).is_err());
        assert!(
            parse(&["--path", "p", "--date", "2023-04-01", "--json-log", "--log-file", "x.log"])
                .is_ok()
        );
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("finder.toml");
        fs::write(
            &config_path,
            "output = \"from-config.txt\"\nonly_folders = true\nfollow_links = true\n",
        )
        .unwrap();
        let config_arg = config_path.to_str().unwrap();

        let cli = parse(&["--path", "p", "--date", "2023-04-01", "-C", config_arg]).unwrap();
        let request = cli.to_request().unwrap();
        assert_eq!(request.output, Some(PathBuf::from("from-config.txt")));
        assert!(request.only_folders);
        assert!(request.follow_links);

        let cli = parse(&[
            "--path", "p", "--date", "2023-04-01", "-C", config_arg, "--output", "cli.txt",
        ])
        .unwrap();
        let request = cli.to_request().unwrap();
        assert_eq!(request.output, Some(PathBuf::from("cli.txt")));
    }

    #[test]
    fn test_missing_config_file() {
        let cli = parse(&["--path", "p", "--date", "2023-04-01", "-C", "/nonexistent/x.toml"]).unwrap();
        assert!(matches!(cli.to_request(), Err(Error::Config(_))));
    }
}
