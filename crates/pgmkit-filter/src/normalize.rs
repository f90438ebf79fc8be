//! Min-max normalization of gradient accumulators
//!
//! A weighted-gradient convolution produces raw signed responses. This
//! module linearly rescales them into the valid sample range: the global
//! minimum maps to 0 and the global maximum to 255.

use crate::FilterResult;
use crate::accum::Accumulator;
use pgmkit_core::{MAX_SAMPLE, Raster};

/// Rescale an accumulator into a sample raster.
///
/// Each value `v` maps to `round((v - min) / (max - min) * 255)`, clamped
/// into `[0, 255]`. The degenerate case `max == min` (flat or
/// constant-gradient input) has no range to stretch; every output sample
/// is 0.
///
/// Consumes the accumulator; it has no further use once rescaled.
pub fn normalize(accum: Accumulator) -> FilterResult<Raster> {
    let mut out = Raster::new(accum.width(), accum.height())?;

    let (min, max) = accum.min_max();
    if min == max {
        return Ok(out);
    }

    let range = (max - min) as f64;
    for (dst, &v) in out.samples_mut().iter_mut().zip(accum.values()) {
        let scaled = ((v - min) as f64 / range * f64::from(MAX_SAMPLE)).round();
        *dst = scaled.clamp(0.0, f64::from(MAX_SAMPLE)) as u8;
    }

    Ok(out)
}
