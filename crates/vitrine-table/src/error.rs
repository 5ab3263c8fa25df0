//! Error types for table derivation and schema construction.

use thiserror::Error;

/// Configuration errors raised by the table engine.
///
/// Degraded inputs (unknown sort keys, queries that match nothing) are not
/// errors; they still produce a well-formed view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Page size must be strictly positive.
    #[error("invalid page size")]
    InvalidPageSize {
        /// Page size supplied by the caller.
        page_size: usize,
    },
    /// Two columns in a schema share the same key.
    #[error("duplicate column key")]
    DuplicateColumn {
        /// Key registered more than once.
        key: &'static str,
    },
}

/// Convenience alias for table engine results.
pub type TableResult<T> = Result<T, TableError>;
