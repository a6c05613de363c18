//! Error types and handling for the `TripAI` application

use thiserror::Error;

/// Main error type for the `TripAI` application
#[derive(Error, Debug)]
pub enum TripAiError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TripAiError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TripAiError::config("missing section");
        assert!(matches!(config_err, TripAiError::Config { .. }));

        let validation_err = TripAiError::validation("empty city");
        assert!(matches!(validation_err, TripAiError::Validation { .. }));

        let general_err = TripAiError::general("something broke");
        assert!(matches!(general_err, TripAiError::General { .. }));
    }

    #[test]
    fn test_error_display() {
        let config_err = TripAiError::config("bad value");
        assert_eq!(config_err.to_string(), "Configuration error: bad value");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let trip_err: TripAiError = io_err.into();
        assert!(matches!(trip_err, TripAiError::Io { .. }));
    }
}
