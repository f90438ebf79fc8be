//! pgmkit-core - Core data structures for grayscale raster processing
//!
//! This crate provides the fundamental image container used by all other
//! pgmkit crates:
//!
//! - [`Raster`]: an 8-bit grayscale image with row-major sample storage
//! - [`Error`]: the unified error type for core operations

mod error;
mod raster;

pub use error::{Error, Result};
pub use raster::{MAX_SAMPLE, Raster};
