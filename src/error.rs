//! # Error Types
//!
//! Structured error handling for the boundary helpers of the cohort engine.
//! The lifecycle and insight computations themselves are infallible; errors
//! only surface where raw input is converted into typed values.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CohortError {
    #[error("Invalid timestamp: {input}: {reason}")]
    InvalidTimestamp { input: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CohortError {
    pub fn invalid_timestamp(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CohortError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for CohortError {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigurationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CohortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CohortError::invalid_timestamp("01/02/2025", "not RFC 3339");
        assert_eq!(
            err.to_string(),
            "Invalid timestamp: 01/02/2025: not RFC 3339"
        );

        let err = CohortError::ConfigurationError("bad level".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad level");
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CohortError = parse_err.into();
        assert!(matches!(err, CohortError::SerializationError(_)));
    }
}
