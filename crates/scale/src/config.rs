//! Serde-facing scale configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a value scale, tagged by `type`.
///
/// The two variants mirror the chart config's
/// `options.scales.value` object:
///
/// ```json
/// { "type": "quantize", "domain": [1, 5], "range": 5 }
/// { "type": "sequential", "domain": [0, 1],
///   "range": { "scheme": "ylorrd" },
///   "special": [{ "value": -1, "color": "#eeeeee" }] }
/// ```
///
/// An unrecognized `type` tag fails deserialization, which is how unknown
/// scale types are rejected before any value is mapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ValueScaleConfig {
    /// Equal-width discrete buckets `0..range-1` over `domain`.
    Quantize {
        /// Inclusive `[lo, hi]` value domain.
        domain: [f64; 2],
        /// Number of buckets.
        range: u32,
    },
    /// Continuous interpolation of `domain` through a named scheme.
    Sequential {
        /// Inclusive `[lo, hi]` value domain.
        domain: [f64; 2],
        /// The named interpolator to use.
        range: SchemeRef,
        /// Exact-value overrides checked before the scale lookup.
        #[serde(default)]
        special: Vec<SpecialColor>,
    },
}

/// Reference to a named interpolation scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemeRef {
    /// Registry name, e.g. `ylorrd`.
    pub scheme: String,
}

/// An exact `(value, color)` override for a sequential scale.
///
/// Typically used to pin the `-1` no-data sentinel and `0` to fixed colors
/// that the gradient would otherwise swallow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecialColor {
    /// The exact value to override.
    pub value: f64,
    /// The color returned for that value.
    pub color: String,
}
