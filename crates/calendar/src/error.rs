//! Error types for the nuwe-calendar crate.

/// Error type for all fallible operations in the nuwe-calendar crate.
///
/// Covers validation failures for month and day-of-month values, malformed
/// date patterns, and date strings that do not match a compiled pattern.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} of year {year} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year for which the day is invalid (February length depends on it).
        year: i32,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a date pattern cannot be compiled.
    #[error("invalid date pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern string that failed to compile.
        pattern: String,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a date string does not match the compiled pattern.
    #[error("cannot parse date '{input}': {reason}")]
    UnparseableDate {
        /// The input string that failed to parse.
        input: String,
        /// Description of the mismatch.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 29,
            month: 2,
            year: 2015,
            max_day: 28,
        };
        assert_eq!(
            err.to_string(),
            "invalid day: 29 for month 2 of year 2015 (max 28)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
