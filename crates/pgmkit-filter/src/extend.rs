//! Border extension by edge replication
//!
//! Restores the original dimensions of an input after a valid-only
//! convolution shrank it, by replicating the boundary samples outward.
//! Historically named "mirror" padding, but the behavior is edge
//! replication, not true reflection - rows above the top repeat row 0,
//! not row 1 - and that exact behavior is kept.

use crate::{FilterError, FilterResult};
use pgmkit_core::Raster;

/// Extend a raster by `margin` pixels on every side, replicating edges.
///
/// Output dimensions are `(width + 2*margin) x (height + 2*margin)`.
/// Each output row copies the input row clamped to `[0, height - 1]`;
/// within that row the first `margin` columns repeat the row's first
/// sample and the last `margin` columns repeat its last sample.
///
/// A margin of 0 returns a clone.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if the extended dimensions
/// would overflow `u32`.
pub fn extend_by_replication(raster: &Raster, margin: u32) -> FilterResult<Raster> {
    if margin == 0 {
        return Ok(raster.clone());
    }

    let out_width = margin
        .checked_mul(2)
        .and_then(|m| raster.width().checked_add(m))
        .ok_or_else(|| FilterError::InvalidParameters(format!("margin too large: {margin}")))?;
    let out_height = 2 * margin + raster.height();

    let mut out = Raster::new(out_width, out_height)?;
    let in_width = raster.width() as usize;
    let margin = margin as usize;

    for out_row in 0..out_height {
        let src_row = (i64::from(out_row) - margin as i64).clamp(0, i64::from(raster.height()) - 1);
        let src = raster.row(src_row as u32);

        let start = (out_row as usize) * (out_width as usize);
        let dst = &mut out.samples_mut()[start..start + out_width as usize];
        dst[..margin].fill(src[0]);
        dst[margin..margin + in_width].copy_from_slice(src);
        dst[margin + in_width..].fill(src[in_width - 1]);
    }

    Ok(out)
}
