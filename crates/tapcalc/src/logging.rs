//! Tracing setup
//!
//! The terminal belongs to the UI while it runs, so events only go to a log
//! file. Without one no subscriber is installed and the macros are no-ops.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, Verbosity};
use crate::error::{AppError, AppResult};

/// Builds the filter: `RUST_LOG` wins, otherwise the configured verbosity
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(verbosity.level_filter().into())
        .from_env_lossy()
}

fn open_log(path: &Path) -> AppResult<File> {
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Installs the global subscriber if a log file is configured.
///
/// Returns whether a subscriber was installed.
pub fn init_logging(config: &AppConfig) -> AppResult<bool> {
    let Some(path) = &config.log_file else {
        return Ok(false);
    };

    let file = open_log(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.verbosity))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::logging(e.to_string()))?;

    Ok(true)
}
