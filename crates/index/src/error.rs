//! Error types for the nuwe-index crate.

use nuwe_calendar::CalendarError;

/// Error type for index construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IndexError {
    /// Returned when a record's date string cannot be parsed under the
    /// configured scheme pattern. Construction aborts on the first such
    /// record instead of silently dropping it.
    #[error("record {position}: invalid date '{date}'")]
    RecordDate {
        /// 0-based position of the record in the input sequence.
        position: usize,
        /// The offending date string.
        date: String,
        /// The underlying parse failure.
        #[source]
        source: CalendarError,
    },
}
