//! Error types for parsing showcase enumerations.

use thiserror::Error;

/// Errors raised when parsing showcase values from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShowcaseError {
    /// Role name was not recognised.
    #[error("unknown role")]
    UnknownRole {
        /// Role text provided by the caller.
        value: String,
    },
    /// Status name was not recognised.
    #[error("unknown status")]
    UnknownStatus {
        /// Status text provided by the caller.
        value: String,
    },
    /// Theme name was not recognised.
    #[error("unknown theme")]
    UnknownTheme {
        /// Theme text provided by the caller.
        value: String,
    },
    /// Colour was not a six-digit hex triplet.
    #[error("invalid colour")]
    InvalidColor {
        /// Colour text provided by the caller.
        value: String,
    },
}

/// Convenience alias for showcase results.
pub type ShowcaseResult<T> = Result<T, ShowcaseError>;
