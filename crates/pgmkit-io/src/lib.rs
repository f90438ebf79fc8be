//! pgmkit-io - PGM image I/O
//!
//! Reads and writes the two PGM sub-formats used as the exchange format
//! for grayscale rasters:
//!
//! - P5: binary payload, one raw byte per sample
//! - P2: ASCII payload, one decimal token per sample
//!
//! Decoding detects the sub-format from the magic token and reports it to
//! the caller; whether to preserve or convert the sub-format on encode is
//! the caller's policy, not the codec's.

mod error;
mod format;
mod pgm;

pub use error::{IoError, IoResult};
pub use format::{PgmFormat, detect_format_from_bytes};
pub use pgm::{read_pgm, read_pgm_mem, write_pgm, write_pgm_mem};
