//! Day and month-start enumeration.

use crate::date::{days_in_year, Date};

/// Enumerates every day from `start` through `end` inclusive.
///
/// Returns an empty vector when `end` is before `start`. Year boundaries
/// are handled automatically (Dec 31 advances to Jan 1 of the next year).
pub fn date_sequence(start: Date, end: Date) -> Vec<Date> {
    if end < start {
        return Vec::new();
    }
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        current = current.next();
    }
    dates
}

/// Enumerates the first day of every month in `[start_year, stop_year)`.
///
/// Returns an empty vector when `stop_year <= start_year`.
pub fn month_starts(start_year: i32, stop_year: i32) -> Vec<Date> {
    let mut starts = Vec::new();
    for year in start_year..stop_year {
        for month in 1..=12 {
            starts.push(Date::new(year, month, 1).expect("day 1 of a valid month"));
        }
    }
    starts
}

/// Enumerates every day of a single calendar year.
pub fn year_days(year: i32) -> Vec<Date> {
    let start = Date::new(year, 1, 1).expect("Jan 1 is always valid");
    let mut dates = Vec::with_capacity(days_in_year(year) as usize);
    let mut current = start;
    while current.year() == year {
        dates.push(current);
        current = current.next();
    }
    dates
}
