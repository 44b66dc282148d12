//! Error types for the nuwe-scale crate.

/// Error type for scale configuration.
///
/// Every variant is raised at configure time; a configured scale never
/// fails while mapping values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScaleError {
    /// Returned when a scale domain is empty, inverted, or non-finite.
    #[error("invalid scale domain [{lo}, {hi}] (must be finite with lo < hi)")]
    InvalidDomain {
        /// Lower end of the offending domain.
        lo: f64,
        /// Upper end of the offending domain.
        hi: f64,
    },

    /// Returned when a quantize scale is configured with zero buckets.
    #[error("quantize scale needs at least one bucket")]
    ZeroBuckets,

    /// Returned when an interpolation scheme name is not in the registry.
    #[error("unknown interpolation scheme '{name}' (known: {known})")]
    UnknownScheme {
        /// The scheme name that was requested.
        name: String,
        /// Comma-separated list of registered scheme names.
        known: String,
    },
}
