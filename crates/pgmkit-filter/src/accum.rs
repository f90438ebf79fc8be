//! Signed accumulator raster
//!
//! Holds the raw output of a weighted-gradient convolution. Values are
//! signed and wide, so negative kernel weights cannot overflow the
//! buffer. An accumulator exists only between convolution and
//! normalization; normalization consumes it.

use pgmkit_core::{Error, Result};

/// A raster of signed accumulator values, row-major.
#[derive(Debug, Clone)]
pub struct Accumulator {
    width: u32,
    height: u32,
    values: Vec<i64>,
}

impl Accumulator {
    /// Create a new accumulator with the given dimensions, zero-filled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, and
    /// [`Error::AllocationFailed`] if the buffer cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let len = (width as usize) * (height as usize);
        let mut values = Vec::new();
        values
            .try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailed)?;
        values.resize(len, 0);

        Ok(Accumulator {
            width,
            height,
            values,
        })
    }

    /// Get the accumulator width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the accumulator height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the values in row-major order.
    #[inline]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Get the values mutably.
    #[inline]
    pub fn values_mut(&mut self) -> &mut [i64] {
        &mut self.values
    }

    /// Minimum and maximum over every value.
    pub fn min_max(&self) -> (i64, i64) {
        let mut min = i64::MAX;
        let mut max = i64::MIN;
        for &v in &self.values {
            min = min.min(v);
            max = max.max(v);
        }
        (min, max)
    }
}
