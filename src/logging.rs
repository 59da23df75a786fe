//! Log output setup
//!
//! The terminal belongs to the menu while it runs, so events go to a log file
//! through a non-blocking writer. RUST_LOG takes precedence over the
//! configured filter.

use crate::config::LogConfig;
use crate::{MenuError, Result, LOG_FILE};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Keeps the log writer alive; dropping it flushes pending lines
pub struct LogGuard {
    _worker: WorkerGuard,
}

/// Initialize file logging based on configuration
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    fs::create_dir_all(&config.directory).map_err(|e| {
        MenuError::Config(format!(
            "Failed to create log directory {}: {}",
            config.directory.display(),
            e
        ))
    })?;

    let appender = tracing_appender::rolling::never(&config.directory, LOG_FILE);
    let (writer, worker) = tracing_appender::non_blocking(appender);

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(writer);

    // A second init (tests, embedding) keeps the first subscriber
    tracing_subscriber::registry()
        .with(create_env_filter(&config.filter))
        .with(fmt_layer)
        .try_init()
        .ok();

    Ok(LogGuard { _worker: worker })
}

/// Record a fatal error; call while the guard is still held
pub fn report_failure(error: &MenuError) {
    tracing::error!(error = %error, "chess-menu failed");
}

/// Build the filter, RUST_LOG first, then the configured directive, then `info`
fn create_env_filter(configured: &str) -> EnvFilter {
    let directive = std::env::var("RUST_LOG")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| configured.to_string());

    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"))
}
