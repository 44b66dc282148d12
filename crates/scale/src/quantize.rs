//! Equal-width discrete bucketing.

use crate::error::ScaleError;

/// A quantize scale: `[lo, hi]` split into `n` equal-width buckets.
///
/// The output is a bucket id in `0..n`, not a color; consumers map the id
/// onto a palette step (the classic heatmap CSS classes `q0-5`..`q4-5`).
#[derive(Debug, Clone, Copy)]
pub struct QuantizeScale {
    lo: f64,
    hi: f64,
    n: u32,
}

impl QuantizeScale {
    /// Creates a quantize scale.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::InvalidDomain`] unless `lo < hi` and both are
    /// finite, and [`ScaleError::ZeroBuckets`] when `n == 0`.
    pub fn new(lo: f64, hi: f64, n: u32) -> Result<Self, ScaleError> {
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(ScaleError::InvalidDomain { lo, hi });
        }
        if n == 0 {
            return Err(ScaleError::ZeroBuckets);
        }
        Ok(Self { lo, hi, n })
    }

    /// Returns the number of buckets.
    pub fn buckets(&self) -> u32 {
        self.n
    }

    /// Maps a value to its bucket id in `0..buckets()`.
    ///
    /// Values outside the domain clamp to the nearest end bucket; NaN
    /// clamps to the bottom bucket.
    pub fn bucket(&self, value: f64) -> u32 {
        let t = (value - self.lo) / (self.hi - self.lo);
        let idx = (t * self.n as f64).floor();
        if idx.is_nan() || idx <= 0.0 {
            0
        } else {
            (idx as u32).min(self.n - 1)
        }
    }
}
