//! Logging system initialization
//!
//! This module provides functions to initialize the tracing/logging system
//! based on application configuration.

use std::io;

use tracing_appender::non_blocking::WorkerGuard;

use super::panic_handler::RunMode;
use crate::config::{LogFormat, LoggingConfig};
use crate::errors::{EntryFormError, Result};

/// Where log lines end up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(String),
    Stderr,
    /// TUI without a log file: console output would corrupt the screen
    Discard,
}

/// Pick the log target for a run mode
pub fn log_target(config: &LoggingConfig, mode: RunMode) -> LogTarget {
    match config.file.as_deref() {
        Some(file) if !file.is_empty() => LogTarget::File(file.to_string()),
        _ if mode == RunMode::Tui => LogTarget::Discard,
        _ => LogTarget::Stderr,
    }
}

/// Initialize logging system based on configuration
///
/// **Note**: This should be called only once during application startup,
/// after the configuration has been loaded. `RUST_LOG` takes precedence
/// over `logging.level` when set.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
pub fn init_logging(config: &LoggingConfig, mode: RunMode) -> Result<WorkerGuard> {
    let target = log_target(config, mode);

    let writer: Box<dyn io::Write + Send + Sync> = match &target {
        LogTarget::File(path) => {
            // Non-rotating, append to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    EntryFormError::file_operation(format!(
                        "Failed to open log file '{}': {}",
                        path, e
                    ))
                })?;
            Box::new(file)
        }
        LogTarget::Stderr => Box::new(io::stderr()),
        LogTarget::Discard => Box::new(io::sink()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.level.clone()));

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_target(false)
        .with_ansi(target == LogTarget::Stderr);

    let result = if config.log_format() == LogFormat::Json {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    result.map_err(|e| EntryFormError::config(format!("Failed to initialize logging: {}", e)))?;

    Ok(guard)
}
