//! Per-window reducers
//!
//! A reducer maps one extracted window to one output value. The set is
//! closed: the convolution loop dispatches on the variant and stays
//! decoupled from any one reducer's internals.

/// Reduction strategy applied to each neighborhood window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reducer {
    /// Arithmetic mean, rounded half away from zero
    Mean,
    /// Order statistic at index `count / 2` (upper median on even counts)
    Median,
    /// Weighted sum with signed weights aligned row-major with the window;
    /// the raw output is not a valid sample and must be normalized
    WeightedGradient(Vec<i32>),
}

impl Reducer {
    /// Whether this reducer produces a signed accumulator that needs
    /// normalization before it can be encoded.
    pub fn is_gradient(&self) -> bool {
        matches!(self, Reducer::WeightedGradient(_))
    }

    /// Reduce one window to one output value.
    ///
    /// The window may be reordered in place (the median sorts it); its
    /// contents are rebuilt before the next position anyway. For `Mean`
    /// and `Median` the result is a sample in `[0, 255]`; for
    /// `WeightedGradient` it is a raw signed accumulator value.
    pub fn reduce(&self, window: &mut [i64]) -> i64 {
        match self {
            Reducer::Mean => {
                let count = window.len() as i64;
                let sum: i64 = window.iter().sum();
                // Samples are non-negative, so adding half the divisor
                // rounds half away from zero. Uniform windows reduce
                // exactly: (v*n + n/2) / n == v.
                (sum + count / 2) / count
            }
            Reducer::Median => {
                window.sort_unstable();
                // Floor division picks the upper median on even counts.
                window[window.len() / 2]
            }
            Reducer::WeightedGradient(weights) => {
                debug_assert_eq!(weights.len(), window.len());
                weights
                    .iter()
                    .zip(window.iter())
                    .map(|(&w, &s)| i64::from(w) * s)
                    .sum()
            }
        }
    }
}
