//! Regression test parameters and comparisons

use pgmkit_core::Raster;

/// Regression test state: name, running index, and recorded failures.
///
/// Comparisons log and record failures instead of panicking immediately,
/// so one run reports everything that went wrong; `cleanup()` returns the
/// overall verdict for the final assert.
pub struct RegParams {
    /// Name of the test (e.g., "convolve")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters.
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values within `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Compare two rasters for exact equality (dimensions, max value,
    /// every sample).
    pub fn compare_raster(&mut self, raster1: &Raster, raster2: &Raster) -> bool {
        self.index += 1;

        if raster1.width() != raster2.width() || raster1.height() != raster2.height() {
            let msg = format!(
                "Failure in {}_reg: raster comparison for index {} - dimension mismatch: \
                 {}x{} vs {}x{}",
                self.test_name,
                self.index,
                raster1.width(),
                raster1.height(),
                raster2.width(),
                raster2.height()
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            return false;
        }

        for (i, (s1, s2)) in raster1
            .samples()
            .iter()
            .zip(raster2.samples())
            .enumerate()
        {
            if s1 != s2 {
                let width = raster1.width() as usize;
                let msg = format!(
                    "Failure in {}_reg: raster comparison for index {} - sample mismatch \
                     at ({}, {}): {} vs {}",
                    self.test_name,
                    self.index,
                    i % width,
                    i / width,
                    s1,
                    s2
                );
                eprintln!("{}", msg);
                self.failures.push(msg);
                self.success = false;
                return false;
            }
        }

        true
    }

    /// Compare two byte buffers for exact equality.
    pub fn compare_bytes(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let msg = format!(
                "Failure in {}_reg: byte comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len()
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Clean up and report results.
    ///
    /// Returns `true` if all comparisons passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get the list of failures.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uniform_raster;

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
    }

    #[test]
    fn test_compare_raster() {
        let mut rp = RegParams::new("test");
        let a = uniform_raster(3, 3, 7);
        let b = uniform_raster(3, 3, 7);
        let c = uniform_raster(3, 2, 7);
        assert!(rp.compare_raster(&a, &b));
        assert!(!rp.compare_raster(&a, &c));
        assert_eq!(rp.failures().len(), 1);
    }
}
