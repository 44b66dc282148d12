//! Continuous sequential scale with exact-value overrides.

use crate::config::SpecialColor;
use crate::error::ScaleError;
use crate::interpolate::{scheme, Interpolator};

/// A sequential scale: `[lo, hi]` normalized into a named interpolator.
///
/// `special` pairs short-circuit the gradient for exact values; the list is
/// checked in order, first match wins.
#[derive(Debug, Clone)]
pub struct SequentialScale {
    lo: f64,
    hi: f64,
    interpolator: Interpolator,
    special: Vec<SpecialColor>,
}

impl SequentialScale {
    /// Creates a sequential scale.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::InvalidDomain`] unless `lo < hi` and both are
    /// finite, or [`ScaleError::UnknownScheme`] for an unregistered
    /// `scheme_name`.
    pub fn new(
        lo: f64,
        hi: f64,
        scheme_name: &str,
        special: Vec<SpecialColor>,
    ) -> Result<Self, ScaleError> {
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(ScaleError::InvalidDomain { lo, hi });
        }
        Ok(Self {
            lo,
            hi,
            interpolator: scheme(scheme_name)?,
            special,
        })
    }

    /// Maps a value to a color string.
    ///
    /// `special` overrides are consulted first; otherwise the value is
    /// linearly normalized and handed to the interpolator, which clamps.
    pub fn color(&self, value: f64) -> String {
        for override_pair in &self.special {
            if override_pair.value == value {
                return override_pair.color.clone();
            }
        }
        let t = (value - self.lo) / (self.hi - self.lo);
        self.interpolator.color_at(t)
    }
}
