//! Error types for SampleLibrary.
//!
//! Arithmetic and geometry have no failure path. Errors only come from the
//! ambient surface: logging installation and transfer-library queries.

use thiserror::Error;

/// Result alias used across the crate.
pub type SampleLibraryResult<T> = Result<T, SampleLibraryError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SampleLibraryError {
    /// Caller supplied an unusable value (NULL pointer, invalid UTF-8, bad directive).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Tracing subscriber could not be installed.
    #[error("logging: {0}")]
    Logging(String),

    /// libcurl returned something unusable.
    #[error("transfer library: {0}")]
    Transfer(String),

    #[error("internal error: {0}")]
    Internal(String),
}
