//! pgmkit-filter - Neighborhood filtering engine
//!
//! This crate provides the generic neighborhood-processing engine:
//!
//! - Sliding-window sample extraction
//! - Pluggable per-window reducers (mean, median, weighted gradient)
//! - Valid-only convolution (output shrinks by `size - 1` per dimension)
//! - Min-max normalization of signed gradient accumulators
//! - Border extension by edge replication to restore pre-shrink dimensions
//! - The filter pipeline composing all of the above with the PGM codec

pub mod accum;
pub mod convolve;
pub mod edge;
mod error;
pub mod extend;
pub mod normalize;
pub mod pipeline;
pub mod reducer;
pub mod window;

pub use error::{FilterError, FilterResult};
pub use reducer::Reducer;

// Re-export commonly used items
pub use accum::Accumulator;
pub use convolve::{convolve_accum, convolve_gray};
pub use edge::EdgeOrientation;
pub use extend::extend_by_replication;
pub use normalize::normalize;
pub use pipeline::{FilterSpec, OutputFormat, apply_filter};
