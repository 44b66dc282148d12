//! Rectilinear month boundaries.

use serde::Serialize;

use nuwe_calendar::{days_in_month, Date};

use crate::error::GridError;

/// One vertex of an outline, in grid units (multiply by the cell size for
/// pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridPoint {
    /// Horizontal position in week columns.
    pub x: u8,
    /// Vertical position in weekday rows.
    pub y: u8,
}

/// The closed rectilinear path enclosing one month's cells.
///
/// The path hugs exactly the month's cells even when its first or last
/// week column is shared with a neighbouring month. The vertex list is
/// explicitly closed: the first and last vertices are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthOutline {
    /// Year of the panel this outline belongs to.
    pub year: i32,
    /// Month (1..=12) being enclosed.
    pub month: u8,
    /// Closed vertex path in grid units.
    pub vertices: Vec<GridPoint>,
}

impl MonthOutline {
    /// Returns `true` when the path is explicitly closed.
    pub fn is_closed(&self) -> bool {
        self.vertices.first() == self.vertices.last()
    }

    /// Renders the outline as SVG path data scaled by `cell_size`.
    ///
    /// Produces the `M..H..V..Z` form the original chart emitted, one
    /// axis-aligned command per segment.
    pub fn to_path(&self, cell_size: f64) -> String {
        let px = |v: u8| v as f64 * cell_size;
        let mut path = String::new();
        let first = self.vertices[0];
        path.push_str(&format!("M{},{}", px(first.x), px(first.y)));
        let mut previous = first;
        // Skip the closing vertex; Z draws the final segment.
        for &vertex in &self.vertices[1..self.vertices.len() - 1] {
            if vertex.y == previous.y {
                path.push_str(&format!("H{}", px(vertex.x)));
            } else {
                path.push_str(&format!("V{}", px(vertex.y)));
            }
            previous = vertex;
        }
        path.push('Z');
        path
    }
}

/// Traces the outline of one month within its year panel.
///
/// With `(w0, d0)` the grid cell of the month's first day and `(w1, d1)`
/// that of its last, the boundary runs
/// `(w0+1,d0) (w0,d0) (w0,7) (w1,7) (w1,d1+1) (w1+1,d1+1) (w1+1,0) (w0+1,0)`
/// and closes. Months whose first day is a Sunday or whose last day is a
/// Saturday collapse some segments to zero length; the path stays valid.
///
/// # Errors
///
/// Returns [`GridError::InvalidMonth`] when `month` is not in 1..=12.
pub fn month_outline(year: i32, month: u8) -> Result<MonthOutline, GridError> {
    let first = Date::new(year, month, 1)?;
    let last = Date::new(year, month, days_in_month(year, month)?)?;

    let (w0, d0) = (first.week_of_year(), first.weekday());
    let (w1, d1) = (last.week_of_year(), last.weekday());

    let point = |x: u8, y: u8| GridPoint { x, y };
    let vertices = vec![
        point(w0 + 1, d0),
        point(w0, d0),
        point(w0, 7),
        point(w1, 7),
        point(w1, d1 + 1),
        point(w1 + 1, d1 + 1),
        point(w1 + 1, 0),
        point(w0 + 1, 0),
        point(w0 + 1, d0),
    ];

    Ok(MonthOutline {
        year,
        month,
        vertices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn january_2016_vertices() {
        // Jan 1 2016: Friday of week 0. Jan 31 2016: Sunday of week 5.
        let outline = month_outline(2016, 1).unwrap();
        let expected: Vec<GridPoint> = [
            (1, 5),
            (0, 5),
            (0, 7),
            (5, 7),
            (5, 1),
            (6, 1),
            (6, 0),
            (1, 0),
            (1, 5),
        ]
        .iter()
        .map(|&(x, y)| GridPoint { x, y })
        .collect();
        assert_eq!(outline.vertices, expected);
    }

    #[test]
    fn path_matches_reference_output() {
        let outline = month_outline(2016, 1).unwrap();
        assert_eq!(outline.to_path(17.0), "M17,85H0V119H85V17H102V0H17Z");
    }

    #[test]
    fn degenerate_month_sunday_start_saturday_end() {
        // Feb 2015 fills exactly four whole week columns.
        let first = Date::new(2015, 2, 1).unwrap();
        let last = Date::new(2015, 2, 28).unwrap();
        assert_eq!(first.weekday(), 0);
        assert_eq!(last.weekday(), 6);

        let outline = month_outline(2015, 2).unwrap();
        assert!(outline.is_closed());
        assert_eq!(outline.vertices.len(), 9);
    }

    #[test]
    fn invalid_month_rejected() {
        assert!(matches!(
            month_outline(2016, 0),
            Err(GridError::InvalidMonth { .. })
        ));
        assert!(matches!(
            month_outline(2016, 13),
            Err(GridError::InvalidMonth { .. })
        ));
    }
}
