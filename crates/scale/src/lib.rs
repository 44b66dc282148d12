//! Value-to-color scales for the calendar heatmap.
//!
//! A [`ValueScale`] maps a per-day numeric value to a display color or a
//! discrete palette bucket. Two scale kinds exist, selected by the `type`
//! tag of [`ValueScaleConfig`]:
//!
//! - **quantize** buckets a numeric domain into equal-width integer buckets;
//!   consumers map the bucket id onto a palette step.
//! - **sequential** normalizes the domain to `[0, 1]` and feeds it through a
//!   named continuous color interpolator, with optional `special` exact-value
//!   overrides (typically the `-1` no-data sentinel and `0`).
//!
//! All validation happens in [`ValueScale::configure`];
//! [`ValueScale::map`] is infallible per value.

mod config;
mod error;
mod interpolate;
mod quantize;
mod sequential;

pub use config::{SchemeRef, SpecialColor, ValueScaleConfig};
pub use error::ScaleError;
pub use interpolate::{scheme, Interpolator};
pub use quantize::QuantizeScale;
pub use sequential::SequentialScale;

/// Output of a single [`ValueScale::map`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaleOutput {
    /// Discrete palette bucket id from a quantize scale.
    Bucket(u32),
    /// `#rrggbb` (or a `special` override) color from a sequential scale.
    Color(String),
}

/// A configured value scale, one variant per scale `type`.
#[derive(Debug, Clone)]
pub enum ValueScale {
    /// Equal-width discrete buckets.
    Quantize(QuantizeScale),
    /// Continuous color interpolation with exact-value overrides.
    Sequential(SequentialScale),
}

impl ValueScale {
    /// Builds a scale from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError`] for a degenerate or non-finite domain, a zero
    /// bucket count, or an unrecognized interpolation scheme name. Nothing
    /// fails later at [`map`](Self::map) time.
    pub fn configure(config: &ValueScaleConfig) -> Result<Self, ScaleError> {
        match config {
            ValueScaleConfig::Quantize { domain, range } => Ok(Self::Quantize(
                QuantizeScale::new(domain[0], domain[1], *range)?,
            )),
            ValueScaleConfig::Sequential {
                domain,
                range,
                special,
            } => Ok(Self::Sequential(SequentialScale::new(
                domain[0],
                domain[1],
                &range.scheme,
                special.clone(),
            )?)),
        }
    }

    /// Maps a value to its bucket or color.
    pub fn map(&self, value: f64) -> ScaleOutput {
        match self {
            Self::Quantize(scale) => ScaleOutput::Bucket(scale.bucket(value)),
            Self::Sequential(scale) => ScaleOutput::Color(scale.color(value)),
        }
    }
}
