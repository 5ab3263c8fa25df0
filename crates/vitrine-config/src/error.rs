//! Error types for loading and validating table settings.

use std::io;

use thiserror::Error;

/// Primary error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Field contained an invalid value.
    #[error("invalid configuration field")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Offending value when available.
        value: Option<String>,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// File system operation failed.
    #[error("filesystem operation failed")]
    Io {
        /// Operation identifier.
        operation: &'static str,
        /// Source IO error.
        source: io::Error,
    },
    /// Settings document was not valid JSON for the settings model.
    #[error("invalid settings document")]
    Parse {
        /// Source parse error.
        source: serde_json::Error,
    },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_stay_terse() {
        let err = ConfigError::InvalidField {
            field: "default_page_size",
            value: Some("0".into()),
            reason: "must be positive",
        };
        assert_eq!(err.to_string(), "invalid configuration field");

        let err = ConfigError::Io {
            operation: "settings.read",
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "filesystem operation failed");
        assert!(std::error::Error::source(&err).is_some());
    }
}
