//! Error types for the application shell
//!
//! Arithmetic failures never reach this type; the engine turns them into the
//! error display instead.

use thiserror::Error;

/// Result type for shell operations
pub type AppResult<T> = Result<T, AppError>;

/// Errors that can occur outside the calculator engine
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Logging could not be set up
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("Invalid config file: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Config could not be serialized
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a logging error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = AppError::config("bad width");
        assert!(err.to_string().contains("Configuration"));
        assert!(err.to_string().contains("bad width"));
    }

    #[test]
    fn test_logging_error() {
        let err = AppError::logging("already set");
        assert_eq!(err.to_string(), "Logging setup failed: already set");
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AppError = io_err.into();
        assert!(err.to_string().contains("I/O"));
    }

    #[test]
    fn test_yaml_error_from() {
        let yaml_err = serde_yaml_ng::from_str::<u16>("[not, a, number]").unwrap_err();
        let err: AppError = yaml_err.into();
        assert!(err.to_string().starts_with("Invalid config file"));
    }
}
