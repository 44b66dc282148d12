use nuwe_grid::{cell_coordinate, month_outline};
use nuwe_calendar::{days_in_month, year_days, Date};

#[test]
fn every_month_outline_is_closed() {
    for year in 2014..2020 {
        for month in 1..=12 {
            let outline = month_outline(year, month).unwrap();
            assert!(outline.is_closed(), "open outline for {year}-{month:02}");
            assert_eq!(outline.vertices.len(), 9);
        }
    }
}

#[test]
fn outline_segments_are_axis_aligned() {
    for month in 1..=12 {
        let outline = month_outline(2016, month).unwrap();
        for pair in outline.vertices.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(
                a.x == b.x || a.y == b.y,
                "diagonal segment in outline for month {month}"
            );
        }
    }
}

#[test]
fn outline_spans_the_month_cells() {
    for month in 1..=12u8 {
        let outline = month_outline(2016, month).unwrap();
        let first = cell_coordinate(Date::new(2016, month, 1).unwrap());
        let last_day = days_in_month(2016, month).unwrap();
        let last = cell_coordinate(Date::new(2016, month, last_day).unwrap());

        let min_x = outline.vertices.iter().map(|v| v.x).min().unwrap();
        let max_x = outline.vertices.iter().map(|v| v.x).max().unwrap();
        assert_eq!(min_x, first.week);
        assert_eq!(max_x, last.week + 1);
    }
}

#[test]
fn neighbouring_months_share_the_boundary_column() {
    // The left edge of each month's outline sits in the same week column
    // as the right edge of the previous month when they share a week.
    let days = year_days(2016);
    for pair in days.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a.month() != b.month() && b.weekday() != 0 {
            let prev = month_outline(2016, a.month()).unwrap();
            let next = month_outline(2016, b.month()).unwrap();
            let prev_max = prev.vertices.iter().map(|v| v.x).max().unwrap();
            let next_min = next.vertices.iter().map(|v| v.x).min().unwrap();
            assert_eq!(prev_max, next_min + 1);
        }
    }
}
