//! Error types for the nuwe-grid crate.

use nuwe_calendar::CalendarError;

/// Error type for grid geometry operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Returned when an outline is requested for an invalid (year, month).
    #[error("cannot outline month: {source}")]
    InvalidMonth {
        /// The underlying calendar validation failure.
        #[from]
        source: CalendarError,
    },
}
