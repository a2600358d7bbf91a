//! Error types for the diff crate.

use thiserror::Error;

/// Errors produced when validating documents for comparison.
///
/// The comparison algorithm itself is total over string inputs; only the
/// required-document check at the boundary can fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiffError {
    /// One or both documents were empty or absent.
    #[error("both contracts are required for comparison")]
    EmptyDocument,
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
