// Rust guideline compliant 2026-02-09

//! Tracing setup for the CLI.
//!
//! Logs are JSON lines written to stderr, or appended to a file when one
//! is given. The default level is `warn` so lookups stay quiet.

use anyhow::{bail, Result};
use std::fs::OpenOptions;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Installs the global tracing subscriber.
///
/// # Arguments
///
/// * `level` - One of `error`, `warn`, `info`, `debug`
/// * `log_file` - Optional file to append logs to
///
/// # Returns
///
/// The writer guard when logging to a file; keep it alive for the run so
/// buffered lines are flushed on exit.
///
/// # Errors
///
/// Returns an error if the level is unknown or the log file cannot be opened.
pub fn init_logging(level: &str, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = parse_log_level(level)?;

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .json()
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}

/// Parses a log level name.
///
/// # Errors
///
/// Returns an error for unknown level names.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        other => bail!("Invalid log level: {}", other),
    }
}
