//! Raster - the grayscale image container
//!
//! The `Raster` structure is the fundamental image type in pgmkit.
//! Samples are stored row-major, one unsigned byte per pixel, with the
//! maximum sample value fixed at 255.
//!
//! # Ownership model
//!
//! A `Raster` is exclusively owned by whichever pipeline stage currently
//! holds it; stages hand rasters to each other by value and the buffer is
//! released when the owning stage is done with it. Nothing is shared or
//! mutated concurrently.

use crate::error::{Error, Result};

/// Maximum sample value for all rasters in this system.
pub const MAX_SAMPLE: u32 = 255;

/// An 8-bit grayscale image.
///
/// # Examples
///
/// ```
/// use pgmkit_core::Raster;
///
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// assert_eq!(raster.max_value(), 255);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Samples in row-major order, length == width * height
    samples: Vec<u8>,
}

impl Raster {
    /// Create a new raster with the given dimensions, filled with zeros.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, and
    /// [`Error::AllocationFailed`] if the sample buffer cannot be
    /// allocated.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let len = (width as usize) * (height as usize);
        let mut samples = Vec::new();
        samples
            .try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailed)?;
        samples.resize(len, 0);

        Ok(Raster {
            width,
            height,
            samples,
        })
    }

    /// Create a raster from an existing sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, and
    /// [`Error::SampleCountMismatch`] if `samples.len() != width * height`.
    pub fn from_samples(width: u32, height: u32, samples: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = (width as usize) * (height as usize);
        if samples.len() != expected {
            return Err(Error::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }

        Ok(Raster {
            width,
            height,
            samples,
        })
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the maximum sample value (always 255).
    #[inline]
    pub fn max_value(&self) -> u32 {
        MAX_SAMPLE
    }

    /// Get the sample buffer in row-major order.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Get the sample buffer mutably.
    #[inline]
    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    /// Get one full row of samples.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    pub fn row(&self, row: u32) -> &[u8] {
        let width = self.width as usize;
        let start = (row as usize) * width;
        &self.samples[start..start + width]
    }

    /// Get a sample value at (col, row).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get(&self, col: u32, row: u32) -> Option<u8> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.samples[(row as usize) * (self.width as usize) + (col as usize)])
    }

    /// Get a sample value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `col >= width` or `row >= height`.
    #[inline]
    pub fn get_unchecked(&self, col: u32, row: u32) -> u8 {
        self.samples[(row as usize) * (self.width as usize) + (col as usize)]
    }

    /// Set a sample value at (col, row).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set(&mut self, col: u32, row: u32, value: u8) -> Result<()> {
        if col >= self.width || row >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (row as usize) * (self.width as usize) + (col as usize),
                len: self.samples.len(),
            });
        }
        self.samples[(row as usize) * (self.width as usize) + (col as usize)] = value;
        Ok(())
    }

    /// Set a sample value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `col >= width` or `row >= height`.
    #[inline]
    pub fn set_unchecked(&mut self, col: u32, row: u32, value: u8) {
        self.samples[(row as usize) * (self.width as usize) + (col as usize)] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zero_filled() {
        let raster = Raster::new(4, 3).unwrap();
        assert_eq!(raster.width(), 4);
        assert_eq!(raster.height(), 3);
        assert_eq!(raster.samples().len(), 12);
        assert!(raster.samples().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert!(matches!(
            Raster::new(0, 5),
            Err(Error::InvalidDimension { width: 0, height: 5 })
        ));
        assert!(matches!(
            Raster::new(5, 0),
            Err(Error::InvalidDimension { width: 5, height: 0 })
        ));
    }

    #[test]
    fn test_from_samples_length_check() {
        assert!(Raster::from_samples(3, 3, vec![0; 9]).is_ok());
        assert!(matches!(
            Raster::from_samples(3, 3, vec![0; 8]),
            Err(Error::SampleCountMismatch {
                expected: 9,
                actual: 8
            })
        ));
    }

    #[test]
    fn test_get_set() {
        let mut raster = Raster::new(3, 2).unwrap();
        raster.set(2, 1, 99).unwrap();
        assert_eq!(raster.get(2, 1), Some(99));
        assert_eq!(raster.get_unchecked(2, 1), 99);
        assert_eq!(raster.get(3, 1), None);
        assert!(raster.set(0, 2, 1).is_err());
    }

    #[test]
    fn test_row_access() {
        let raster = Raster::from_samples(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(raster.row(0), &[1, 2, 3]);
        assert_eq!(raster.row(1), &[4, 5, 6]);
    }
}
