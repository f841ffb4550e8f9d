//! Running statistics for a single action.

/// Accumulated sum and sample count for one action name.
///
/// Records only come into existence together with their first sample, so a
/// record handed out by an accumulator always has `count >= 1`. The pair is
/// `Copy` so readers receive `total` and `count` as one matched value.
///
/// A running mean is kept next to the sum. It is only reported when the sum
/// has overflowed `f64`, so finite samples always yield a finite average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionRecord {
    total: f64,
    count: u64,
    mean: f64,
}

impl ActionRecord {
    /// Start a record from its first sample.
    pub(crate) fn with_sample(value: f64) -> Self {
        Self {
            total: value,
            count: 1,
            mean: value,
        }
    }

    /// Fold one more sample into the record.
    pub(crate) fn add(&mut self, value: f64) {
        self.total += value;
        self.count += 1;
        // Divide before adding so no intermediate exceeds the larger operand.
        let n = self.count as f64;
        self.mean = self.mean - self.mean / n + value / n;
    }

    /// Sum of every recorded value. Infinite once the sum overflows `f64`.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Number of recorded values.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Mean of the recorded values, or `0.0` when nothing was recorded.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        if self.total.is_finite() {
            self.total / self.count as f64
        } else {
            self.mean
        }
    }
}
