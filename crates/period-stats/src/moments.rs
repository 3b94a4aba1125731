//! Running mean and variance
//!
//! Welford's online algorithm: O(1) memory, no raw sample storage, and no
//! catastrophic cancellation for long streams of large values.

/// Running count, mean and sum of squared deviations (M2)
#[derive(Debug, Clone, Default)]
pub(crate) struct RunningMoments {
    count: u64,
    mean: f64,
    m2: f64,
}

impl RunningMoments {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Incorporate one sample
    pub(crate) fn add(&mut self, value: f64) {
        if self.count == 0 {
            self.mean = value;
            self.m2 = 0.0;
            self.count = 1;
            return;
        }

        let n = self.count + 1;
        let new_mean = self.mean + (value - self.mean) / n as f64;
        self.m2 += (value - self.mean) * (value - new_mean);
        self.mean = new_mean;
        self.count = n;
    }

    pub(crate) fn count(&self) -> u64 {
        self.count
    }

    /// Running mean, 0.0 before the first sample
    pub(crate) fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation (Bessel-corrected)
    ///
    /// 0.0 with fewer than two samples.
    pub(crate) fn standard_deviation(&self) -> f64 {
        if self.count > 1 {
            (self.m2 / (self.count - 1) as f64).sqrt()
        } else {
            0.0
        }
    }
}
