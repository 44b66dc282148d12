//! # nuwe-calendar
//!
//! Civil (proleptic Gregorian, leap-aware) date arithmetic for the calendar
//! heatmap. Dates are plain `(year, month, day)` values with no time-of-day
//! and no timezone; a day is the unit of resolution everywhere.
//!
//! ## Quick Start
//!
//! ```ignore
//! use nuwe_calendar::{Date, DatePattern, date_sequence};
//!
//! let pattern = DatePattern::parse_pattern("YYYY-MM-DD").unwrap();
//! let date = pattern.parse("2016-01-05").unwrap();
//! assert_eq!(date.weekday(), 2); // Tuesday, Sunday = 0
//!
//! let jan = date_sequence(
//!     Date::new(2016, 1, 1).unwrap(),
//!     Date::new(2016, 1, 31).unwrap(),
//! );
//! assert_eq!(jan.len(), 31);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Validated civil date, successor arithmetic, weekday/week ordinals |
//! | `pattern` | Compiled `YYYY`/`MM`/`DD` date patterns for parse and format |
//! | `sequence` | Contiguous day and month-start enumeration |
//! | `error` | Error types |

mod date;
mod error;
mod pattern;
mod sequence;

pub use date::{days_in_month, days_in_year, is_leap_year, Date};
pub use error::CalendarError;
pub use pattern::DatePattern;
pub use sequence::{date_sequence, month_starts, year_days};
