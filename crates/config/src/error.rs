//! Error types for the nuwe-config crate.

/// Error type for configuration resolution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Returned when the merged tree does not deserialize into the typed
    /// chart configuration: a missing required field, a wrong value type,
    /// or an unknown scale `type` tag.
    ///
    /// The reason is carried as text because `serde_json::Error` is
    /// neither `Clone` nor `PartialEq`.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Description of the problem, as reported by deserialization.
        reason: String,
    },
}
