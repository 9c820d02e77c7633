//! Configuration types for the EXIF date finder

use crate::time::exif::{DEFAULT_DATE_TAGS, DateTag};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings that can be stored in a TOML config file.
///
/// The root path and the target date always come from the command line;
/// everything here is a default the CLI can override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File to mirror matching lines into
    pub output: Option<PathBuf>,

    /// Print every checked file and its EXIF date
    pub verbose: bool,

    /// Report folders of matches instead of files
    pub only_folders: bool,

    /// Prefix each line with the target date
    pub include_date: bool,

    /// Follow symbolic links while walking the tree
    pub follow_links: bool,

    /// EXIF date fields to read, in priority order
    pub date_tags: Vec<DateTag>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: None,
            verbose: false,
            only_folders: false,
            include_date: false,
            follow_links: false,
            date_tags: DEFAULT_DATE_TAGS.to_vec(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        if config.date_tags.is_empty() {
            return Err(ConfigError::NoDateTags {
                path: path.to_path_buf(),
            });
        }

        Ok(config)
    }
}

/// One scan, fully resolved from CLI arguments and config.
/// Built once at startup and never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    /// Root directory to scan
    pub root: PathBuf,
    /// Calendar date the capture date must equal
    pub target_date: NaiveDate,
    /// Optional mirror file for matching lines
    pub output: Option<PathBuf>,
    pub verbose: bool,
    pub only_folders: bool,
    pub include_date: bool,
    pub follow_links: bool,
    pub date_tags: Vec<DateTag>,
}

impl ScanRequest {
    /// Request with default settings for `root` and `target_date`
    pub fn new(root: impl Into<PathBuf>, target_date: NaiveDate) -> Self {
        Self::from_config(root, target_date, Config::default())
    }

    /// Request taking every optional setting from `config`
    pub fn from_config(root: impl Into<PathBuf>, target_date: NaiveDate, config: Config) -> Self {
        Self {
            root: root.into(),
            target_date,
            output: config.output,
            verbose: config.verbose,
            only_folders: config.only_folders,
            include_date: config.include_date,
            follow_links: config.follow_links,
            date_tags: config.date_tags,
        }
    }
}

/// Errors that can occur when loading configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read configuration file
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse configuration file
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// `date_tags` was given but empty
    NoDateTags { path: PathBuf },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError { path, source } => {
                write!(f, "Failed to read config file '{}': {}", path.display(), source)
            }
            ConfigError::ParseError { path, source } => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), source)
            }
            ConfigError::NoDateTags { path } => {
                write!(f, "Config file '{}' lists no date_tags", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ReadError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::NoDateTags { .. } => None,
        }
    }
}
