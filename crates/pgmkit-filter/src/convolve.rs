//! Valid-only convolution
//!
//! Slides a `size x size` window over every position fully inside the
//! input and reduces each window to one output value. No boundary
//! handling happens here: the output shrinks by `size - 1` in each
//! dimension, and [`crate::extend::extend_by_replication`] restores the
//! original dimensions afterwards when the caller wants that.

use crate::accum::Accumulator;
use crate::reducer::Reducer;
use crate::window::fill_window;
use crate::{FilterError, FilterResult};
use pgmkit_core::{MAX_SAMPLE, Raster};

/// Validate a kernel against the raster it will be applied to.
///
/// The size must be odd, at least 1, and no larger than the smaller
/// raster dimension. Weighted kernels must carry exactly `size * size`
/// weights.
pub fn check_kernel(raster: &Raster, size: u32, reducer: &Reducer) -> FilterResult<()> {
    if size == 0 || size % 2 == 0 {
        return Err(FilterError::InvalidParameters(format!(
            "kernel size must be odd and >= 1, got {size}"
        )));
    }
    if size > raster.width().min(raster.height()) {
        return Err(FilterError::InvalidParameters(format!(
            "kernel size {size} exceeds raster dimensions {}x{}",
            raster.width(),
            raster.height()
        )));
    }
    if let Reducer::WeightedGradient(weights) = reducer {
        let expected = (size as usize) * (size as usize);
        if weights.len() != expected {
            return Err(FilterError::InvalidParameters(format!(
                "weighted kernel needs {expected} weights, got {}",
                weights.len()
            )));
        }
    }
    Ok(())
}

/// Convolve with a sample-producing reducer (mean or median).
///
/// Output dimensions are `(width - size + 1) x (height - size + 1)`.
/// Results are clamped into `[0, 255]`.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] for an invalid kernel, or
/// when called with a weighted-gradient reducer - its raw output is an
/// accumulator, not samples; use [`convolve_accum`] for that.
pub fn convolve_gray(raster: &Raster, size: u32, reducer: &Reducer) -> FilterResult<Raster> {
    check_kernel(raster, size, reducer)?;
    if reducer.is_gradient() {
        return Err(FilterError::InvalidParameters(
            "weighted-gradient kernels produce an accumulator; use convolve_accum".into(),
        ));
    }

    let out_width = raster.width() - size + 1;
    let out_height = raster.height() - size + 1;
    let mut out = Raster::new(out_width, out_height)?;

    let mut window = vec![0i64; (size as usize) * (size as usize)];
    for r in 0..out_height {
        for c in 0..out_width {
            fill_window(raster, r, c, size, &mut window);
            let value = reducer.reduce(&mut window);
            out.set_unchecked(c, r, value.clamp(0, i64::from(MAX_SAMPLE)) as u8);
        }
    }

    Ok(out)
}

/// Convolve with signed weights into an accumulator raster.
///
/// Output dimensions are `(width - size + 1) x (height - size + 1)`.
/// The raw responses are not samples; normalize the accumulator to get a
/// raster.
pub fn convolve_accum(raster: &Raster, size: u32, weights: &[i32]) -> FilterResult<Accumulator> {
    let reducer = Reducer::WeightedGradient(weights.to_vec());
    check_kernel(raster, size, &reducer)?;

    let out_width = raster.width() - size + 1;
    let out_height = raster.height() - size + 1;
    let mut accum = Accumulator::new(out_width, out_height)?;

    let mut window = vec![0i64; (size as usize) * (size as usize)];
    for r in 0..out_height {
        for c in 0..out_width {
            fill_window(raster, r, c, size, &mut window);
            accum.values_mut()[(r as usize) * (out_width as usize) + (c as usize)] =
                reducer.reduce(&mut window);
        }
    }

    Ok(accum)
}
