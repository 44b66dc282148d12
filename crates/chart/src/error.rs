//! Error types for the nuwe-chart crate.

use nuwe_calendar::CalendarError;
use nuwe_config::ConfigError;
use nuwe_grid::GridError;
use nuwe_index::IndexError;
use nuwe_scale::ScaleError;

/// Error type for chart construction.
///
/// Every failure is synchronous and scoped to one [`crate::render`] call;
/// the variants say which pipeline stage rejected the input.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// The user configuration did not resolve into a usable tree.
    #[error("config resolution failed: {source}")]
    Config {
        /// The underlying resolution failure.
        #[from]
        source: ConfigError,
    },

    /// The `data.scheme.date` pattern did not compile.
    #[error("date scheme rejected: {source}")]
    Scheme {
        /// The underlying pattern failure.
        #[from]
        source: CalendarError,
    },

    /// The value scale configuration was rejected.
    #[error("value scale rejected: {source}")]
    Scale {
        /// The underlying scale failure.
        #[from]
        source: ScaleError,
    },

    /// A data record failed to parse during index construction.
    #[error("index construction failed: {source}")]
    Index {
        /// The underlying index failure.
        #[from]
        source: IndexError,
    },

    /// Month geometry could not be computed.
    #[error("grid geometry failed: {source}")]
    Grid {
        /// The underlying grid failure.
        #[from]
        source: GridError,
    },
}
