//! Neighborhood window extraction
//!
//! Pulls the flat `size * size` window of samples under the kernel at one
//! output position. The window is rebuilt for every position; callers
//! reuse one scratch buffer across positions, but its contents never
//! carry over.

use pgmkit_core::Raster;

/// Fill `window` with the `size * size` samples starting at
/// `(top_row, top_col)`, in row-major order.
///
/// Requires `top_row + size <= raster.height()` and
/// `top_col + size <= raster.width()`, and `window.len() == size * size`.
/// Violating either is a programming error, not a runtime failure: this
/// panics rather than returning an error.
pub fn fill_window(raster: &Raster, top_row: u32, top_col: u32, size: u32, window: &mut [i64]) {
    debug_assert!(top_row + size <= raster.height());
    debug_assert!(top_col + size <= raster.width());
    debug_assert_eq!(window.len(), (size as usize) * (size as usize));

    let width = raster.width() as usize;
    let size = size as usize;
    let samples = raster.samples();

    for dy in 0..size {
        let start = (top_row as usize + dy) * width + top_col as usize;
        let src = &samples[start..start + size];
        let dst = &mut window[dy * size..(dy + 1) * size];
        for (d, s) in dst.iter_mut().zip(src) {
            *d = i64::from(*s);
        }
    }
}
