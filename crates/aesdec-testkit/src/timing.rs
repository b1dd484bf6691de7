//! Coarse timing probe for advisory constant-time checks.
//!
//! Wall-clock measurements on a shared machine are noisy; results from here
//! are informative only. The structural guarantee comes from the full-table
//! scans in `aesdec_core::tables`.

use std::time::Instant;

/// Runs a closure repeatedly and records per-sample durations.
#[derive(Clone, Copy, Debug)]
pub struct TimingTester {
    num_samples: usize,
    num_iterations: usize,
}

impl TimingTester {
    /// `num_samples` samples of `num_iterations` calls each.
    pub fn new(num_samples: usize, num_iterations: usize) -> Self {
        Self {
            num_samples,
            num_iterations,
        }
    }

    /// Nanoseconds per sample.
    pub fn measure<F: FnMut()>(&self, mut f: F) -> Vec<u128> {
        (0..self.num_samples)
            .map(|_| {
                let start = Instant::now();
                for _ in 0..self.num_iterations {
                    f();
                }
                start.elapsed().as_nanos()
            })
            .collect()
    }

    /// Median of `times`, or 0 for an empty slice.
    pub fn median(times: &[u128]) -> f64 {
        if times.is_empty() {
            return 0.0;
        }
        let mut sorted = times.to_vec();
        sorted.sort_unstable();
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
        } else {
            sorted[mid] as f64
        }
    }

    /// Ratio of the larger median to the smaller one; 1.0 means identical.
    pub fn median_ratio(a: &[u128], b: &[u128]) -> f64 {
        let (ma, mb) = (Self::median(a), Self::median(b));
        let (lo, hi) = if ma < mb { (ma, mb) } else { (mb, ma) };
        if lo == 0.0 {
            return f64::INFINITY;
        }
        hi / lo
    }
}
