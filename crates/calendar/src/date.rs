//! Civil date with weekday and week-of-year ordinals.

use crate::error::CalendarError;

/// Number of days in each month of a non-leap year (index 0 unused,
/// index 1 = January, ..., index 12 = December).
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-of-year on which each month starts in a non-leap year (index 0 unused,
/// index 1 = January starts at DOY 1, ...).
const MONTH_START_DOY: [u16; 13] = [0, 1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given month of the given year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    let mut days = DAYS_PER_MONTH[month as usize];
    if month == 2 && is_leap_year(year) {
        days += 1;
    }
    Ok(days)
}

/// Returns the number of days in the given year (365 or 366).
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// A civil date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl Date {
    /// Creates a new `Date` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month or day is invalid for the
    /// given year (February 29 is only valid in leap years).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(month, day)` as a tuple.
    pub fn month_day(self) -> (u8, u8) {
        (self.month, self.day)
    }

    /// Returns the 1-based day-of-year (1..=366).
    pub fn day_of_year(self) -> u16 {
        let mut doy = MONTH_START_DOY[self.month as usize] + self.day as u16 - 1;
        if self.month > 2 && is_leap_year(self.year) {
            doy += 1;
        }
        doy
    }

    /// Returns the next date, wrapping month and year boundaries.
    ///
    /// December 31 wraps to January 1 of the following year.
    pub fn next(self) -> Self {
        let max_day = DAYS_PER_MONTH[self.month as usize]
            + if self.month == 2 && is_leap_year(self.year) {
                1
            } else {
                0
            };
        if self.day < max_day {
            Self {
                day: self.day + 1,
                ..self
            }
        } else if self.month < 12 {
            Self {
                year: self.year,
                month: self.month + 1,
                day: 1,
            }
        } else {
            Self {
                year: self.year + 1,
                month: 1,
                day: 1,
            }
        }
    }

    /// Days since the civil epoch 1970-01-01, negative for earlier dates.
    fn days_from_epoch(self) -> i64 {
        let y = self.year as i64 - if self.month <= 2 { 1 } else { 0 };
        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = y - era * 400;
        let m = self.month as i64;
        let doy = (153 * (m + if m > 2 { -3 } else { 9 }) + 2) / 5 + self.day as i64 - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146097 + doe - 719468
    }

    /// Returns the weekday as a decimal number in 0..=6 with Sunday = 0.
    pub fn weekday(self) -> u8 {
        // 1970-01-01 was a Thursday (= 4 with Sunday as 0).
        (((self.days_from_epoch() + 4) % 7 + 7) % 7) as u8
    }

    /// Returns the week-of-year in 0..=53, counting Sunday-started weeks.
    ///
    /// Days before the first Sunday of the year belong to week 0, matching
    /// the strftime `%U` convention.
    pub fn week_of_year(self) -> u8 {
        let jan1 = Self {
            year: self.year,
            month: 1,
            day: 1,
        };
        // Days from Jan 1 to the first Sunday of the year (0 when Jan 1
        // is itself a Sunday, which puts Jan 1 in week 1).
        let first_sunday = (7 - jan1.weekday() as u16) % 7;
        ((self.day_of_year() - 1 + 7 - first_sunday) / 7) as u8
    }
}
