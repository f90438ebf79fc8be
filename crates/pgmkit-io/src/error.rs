//! I/O error types
//!
//! Provides a unified error type for raster I/O. The codec never recovers
//! from any of these internally; it fails fast and callers own the
//! user-visible messaging.

use pgmkit_core::MAX_SAMPLE;
use thiserror::Error;

/// Error type for raster I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, truncated payload, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream is not structurally valid PGM
    /// (unrecognized magic token, unparsable header token)
    #[error("format error: {0}")]
    Format(String),

    /// An ASCII sample token lies outside the valid range
    #[error("sample out of range: {value} not in 0..={max}", max = MAX_SAMPLE)]
    SampleOutOfRange {
        /// The parsed token value
        value: i64,
    },

    /// An error from the core library (e.g. invalid dimensions)
    #[error("core error: {0}")]
    Core(#[from] pgmkit_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
