//! The filter pipeline
//!
//! Composes codec, convolution, normalization, and border extension into
//! one pass over in-memory bytes:
//!
//! decode -> convolve -> (normalize) -> (extend) -> encode
//!
//! A failure at any stage aborts the whole pipeline; no stage is retried
//! and no partial output is produced.

use crate::FilterResult;
use crate::convolve::{convolve_accum, convolve_gray};
use crate::edge::{EdgeOrientation, SOBEL_SIZE, sobel_weights};
use crate::extend::extend_by_replication;
use crate::normalize::normalize;
use crate::reducer::Reducer;
use pgmkit_io::{PgmFormat, read_pgm_mem, write_pgm_mem};
use tracing::debug;

/// Output sub-format policy.
///
/// The codec itself has no preference; the caller decides whether to keep
/// the sub-format the input arrived in or force one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Encode in the same sub-format the input was decoded from
    #[default]
    Preserve,
    /// Encode in a fixed sub-format regardless of the input
    Force(PgmFormat),
}

/// One neighborhood operator plus its pipeline configuration.
#[derive(Debug, Clone)]
pub struct FilterSpec {
    /// Kernel size; must be odd, >= 1, and fit inside the input raster
    pub size: u32,
    /// Per-window reduction strategy
    pub reducer: Reducer,
    /// Whether to restore the pre-shrink dimensions by edge replication.
    /// Smoothing filters restore; the historical gradient filters leave
    /// the shrunk dimensions, so this is per kernel family rather than
    /// hardcoded.
    pub restore_padding: bool,
    /// Output sub-format policy
    pub output: OutputFormat,
}

impl FilterSpec {
    /// Mean smoothing with the given kernel size; padding restored.
    pub fn average(size: u32) -> Self {
        FilterSpec {
            size,
            reducer: Reducer::Mean,
            restore_padding: true,
            output: OutputFormat::Preserve,
        }
    }

    /// Median smoothing with the given kernel size; padding restored.
    pub fn median(size: u32) -> Self {
        FilterSpec {
            size,
            reducer: Reducer::Median,
            restore_padding: true,
            output: OutputFormat::Preserve,
        }
    }

    /// Sobel edge detection with the built-in 3x3 weights, normalized;
    /// padding not restored, so the output shrinks by the kernel margin.
    pub fn sobel(orientation: EdgeOrientation) -> Self {
        FilterSpec {
            size: SOBEL_SIZE,
            reducer: Reducer::WeightedGradient(sobel_weights(orientation)),
            restore_padding: false,
            output: OutputFormat::Preserve,
        }
    }
}

/// Run the whole pipeline over encoded input bytes.
///
/// # Errors
///
/// Decode failures ([`pgmkit_io::IoError`]) and kernel validation
/// failures abort the pipeline before any output is produced.
pub fn apply_filter(input: &[u8], spec: &FilterSpec) -> FilterResult<Vec<u8>> {
    let (raster, informat) = read_pgm_mem(input)?;
    debug!(
        width = raster.width(),
        height = raster.height(),
        size = spec.size,
        reducer = ?spec.reducer,
        "applying neighborhood filter"
    );

    let filtered = match &spec.reducer {
        Reducer::WeightedGradient(weights) => {
            let accum = convolve_accum(&raster, spec.size, weights)?;
            normalize(accum)?
        }
        reducer => convolve_gray(&raster, spec.size, reducer)?,
    };

    let restored = if spec.restore_padding {
        extend_by_replication(&filtered, spec.size / 2)?
    } else {
        filtered
    };
    debug!(
        width = restored.width(),
        height = restored.height(),
        restore_padding = spec.restore_padding,
        "filter pass complete"
    );

    let outformat = match spec.output {
        OutputFormat::Preserve => informat,
        OutputFormat::Force(format) => format,
    };
    Ok(write_pgm_mem(&restored, outformat)?)
}
