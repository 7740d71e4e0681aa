//! Application configuration
//!
//! Merged in order: built-in defaults, then an optional YAML file, then
//! command-line flags. Nothing here changes calculator semantics.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::error::{AppError, AppResult};

/// Default maximum keypad width in columns
pub const DEFAULT_MAX_WIDTH: u16 = 44;

/// Narrowest keypad that still fits four buttons per row
pub const MIN_MAX_WIDTH: u16 = 22;

/// Logging verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Start/stop and warnings
    #[default]
    Normal,
    /// Every dispatched event
    Verbose,
    /// Everything
    Debug,
}

impl Verbosity {
    /// Derives verbosity from `-v` count and `-q`
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// The most detailed level that gets logged
    #[must_use]
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::ERROR,
            Self::Normal => LevelFilter::INFO,
            Self::Verbose => LevelFilter::DEBUG,
            Self::Debug => LevelFilter::TRACE,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Maximum keypad width in columns
    pub max_width: u16,
    /// Logging verbosity
    pub verbosity: Verbosity,
    /// Log destination; logging is off when absent
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            verbosity: Verbosity::Normal,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum keypad width
    #[must_use]
    pub const fn with_max_width(mut self, max_width: u16) -> Self {
        self.max_width = max_width;
        self
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set log file
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Parses configuration from YAML; missing keys keep their defaults
    pub fn from_yaml_str(yaml: &str) -> AppResult<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Checks value ranges
    pub fn validate(&self) -> AppResult<()> {
        if self.max_width < MIN_MAX_WIDTH {
            return Err(AppError::config(format!(
                "max_width must be at least {MIN_MAX_WIDTH}, got {}",
                self.max_width
            )));
        }
        Ok(())
    }

    /// Renders the configuration as pretty JSON
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
