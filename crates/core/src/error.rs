//! Store error model.

use thiserror::Error;

use crate::id::RecordId;

/// Result type used by the strict store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// The lenient CRUD surface (`update`/`delete`) is total and never produces
/// errors; this enum only surfaces through the strict `try_*` variants and
/// identifier parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the given id exists in the store.
    #[error("record not found: {0}")]
    NotFound(RecordId),

    /// An identifier failed to parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}
