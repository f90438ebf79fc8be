//! pgmkit-test - Regression test support
//!
//! Provides the [`RegParams`] harness used by the `*_reg.rs` tests in the
//! other crates, plus small builders for synthetic test rasters.
//!
//! # Usage
//!
//! ```
//! use pgmkit_test::{RegParams, uniform_raster};
//!
//! let mut rp = RegParams::new("example");
//! rp.compare_values(100.0, uniform_raster(3, 3, 100).samples()[0] as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;

use pgmkit_core::Raster;

/// Build a raster where every sample has the same value.
pub fn uniform_raster(width: u32, height: u32, value: u8) -> Raster {
    Raster::from_samples(
        width,
        height,
        vec![value; (width as usize) * (height as usize)],
    )
    .expect("valid test raster dimensions")
}

/// Build a raster whose samples ramp left to right, wrapping at 256.
pub fn ramp_raster(width: u32, height: u32) -> Raster {
    let samples = (0..height)
        .flat_map(|_| (0..width).map(|c| (c % 256) as u8))
        .collect();
    Raster::from_samples(width, height, samples).expect("valid test raster dimensions")
}
