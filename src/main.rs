//! EXIF Date Finder - find JPEG photos taken on a given date
//!
//! Scans a directory tree, reads each JPEG's EXIF capture date and prints
//! the files or folders whose date matches the one given on the command line.

use anyhow::Result;
use clap::Parser;
use exif_date_finder::{Cli, Finder};
use std::path::Path;
use tracing::{Level, error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

// Stdout carries results only, so all decoration goes to stderr
mod cli_output {
    use crossterm::{
        ExecutableCommand,
        style::{Color, Print, Stylize, style},
    };
    use std::io::stderr;

    /// Error color (red)
    const ERROR: Color = Color::Red;

    /// Print an error message
    pub fn print_error(msg: &str) {
        let _ = stderr().execute(Print(style("✗ ").with(ERROR).bold()));
        let _ = stderr().execute(Print(format!("Error: {}\n", msg)));
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve the config file first so its `verbose` setting reaches logging
    let request = cli.to_request();
    let verbose = request.as_ref().map_or(cli.verbose, |r| r.verbose);

    let guard = setup_logging(&cli, log_level(verbose))?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "EXIF date finder starting"
    );

    let request = match request {
        Ok(request) => request,
        Err(e) => fail(&e, guard),
    };

    if request.verbose {
        info!(?request, "Scan request");
    }

    match Finder::new(request).run() {
        Ok(stats) => {
            info!(
                matched = stats.matched,
                emitted = stats.emitted,
                "Scan complete"
            );
            Ok(())
        }
        Err(e) => fail(&e, guard),
    }
}

/// Report a fatal error and exit with status 1
fn fail(err: &exif_date_finder::Error, guard: Option<WorkerGuard>) -> ! {
    error!(error = %err, "Scan failed");
    // flush the log file before the process goes away
    drop(guard);
    cli_output::print_error(&err.to_string());
    std::process::exit(1);
}

/// Default log level; `RUST_LOG` overrides it
fn log_level(verbose: bool) -> Level {
    if verbose { Level::INFO } else { Level::WARN }
}

/// Setup logging: console on stderr, plus an optional log file
fn setup_logging(cli: &Cli, level: Level) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr));

    let Some(log_path) = cli.log_file.as_deref() else {
        subscriber.init();
        return Ok(None);
    };

    let file = open_log_file(log_path)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    if cli.json_log {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
            .init();
    }

    Ok(Some(guard))
}

fn open_log_file(log_path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = log_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?;
    Ok(file)
}
