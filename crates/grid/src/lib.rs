//! Calendar-grid geometry.
//!
//! Each day of a year panel occupies one cell of a week-by-weekday grid:
//! the week-of-year picks the column, the weekday (Sunday = 0) picks the
//! row. [`month_outline`] traces the rectilinear boundary that separates
//! one month's cells from its neighbours, which is what the classic
//! calendar heatmap draws between months.
//!
//! Everything here is a pure function of the date; nothing is cached.

mod error;
mod outline;

pub use error::GridError;
pub use outline::{month_outline, GridPoint, MonthOutline};

use nuwe_calendar::Date;

/// Grid position of a single day within its year panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct GridCoord {
    /// Week-of-year column, 0..=53.
    pub week: u8,
    /// Weekday row, 0..=6 with Sunday = 0.
    pub weekday: u8,
}

/// Returns the grid cell for a date.
///
/// Deterministic and injective within a year: the week column advances
/// exactly when the weekday row wraps back to Sunday.
pub fn cell_coordinate(date: Date) -> GridCoord {
    GridCoord {
        week: date.week_of_year(),
        weekday: date.weekday(),
    }
}

/// Returns the pixel origin of a cell for a given cell size.
pub fn cell_origin(coord: GridCoord, cell_size: f64) -> (f64, f64) {
    (
        coord.week as f64 * cell_size,
        coord.weekday as f64 * cell_size,
    )
}
