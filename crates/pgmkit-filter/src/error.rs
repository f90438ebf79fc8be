//! Error types for pgmkit-filter
//!
//! The engine never recovers from these internally; every failure is
//! terminal for the invocation that produced it and propagates to the
//! caller.

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pgmkit_core::Error),

    /// Codec or file I/O error
    #[error("I/O error: {0}")]
    Io(#[from] pgmkit_io::IoError),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
