//! Serializable output descriptors for renderers.

use serde::Serialize;
use serde_json::Value;

use nuwe_grid::GridPoint;

/// The complete chart description handed to a renderer.
#[derive(Debug, Clone, Serialize)]
pub struct ChartRender {
    /// The resolved configuration tree (defaults overlaid with user input).
    pub resolved: Value,
    /// Panel width in pixels.
    pub width: f64,
    /// Panel height in pixels.
    pub height: f64,
    /// Side length of one day cell in pixels.
    pub cell_size: f64,
    /// One panel per year of the configured range, in year order.
    pub panels: Vec<YearPanel>,
}

/// All cells and outlines of a single calendar year.
#[derive(Debug, Clone, Serialize)]
pub struct YearPanel {
    /// The calendar year this panel shows.
    pub year: i32,
    /// Horizontal panel offset centering the week columns.
    pub origin_x: f64,
    /// Vertical panel offset bottom-aligning the weekday rows.
    pub origin_y: f64,
    /// One descriptor per day of the year, in date order.
    pub cells: Vec<CellDescriptor>,
    /// One outline per month, January first.
    pub outlines: Vec<OutlinePath>,
}

/// Everything a renderer needs to draw one day cell.
#[derive(Debug, Clone, Serialize)]
pub struct CellDescriptor {
    /// Canonical day key, formatted under the configured date scheme.
    pub key: String,
    /// Week-of-year column, 0..=53.
    pub week: u8,
    /// Weekday row, 0..=6 with Sunday = 0.
    pub weekday: u8,
    /// Pixel x within the panel.
    pub x: f64,
    /// Pixel y within the panel.
    pub y: f64,
    /// Cell side length in pixels.
    pub size: f64,
    /// The indexed value, `-1` for days without data.
    pub value: f64,
    /// Display fill for the cell.
    pub fill: CellFill,
    /// Tooltip text: the day key, plus the value as a percentage when
    /// data exists.
    pub tooltip: String,
}

/// Display fill of one cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CellFill {
    /// No data for this day; renderers draw the bare cell.
    NoData,
    /// Explicit zero activity, distinct from missing data.
    Zero,
    /// Palette bucket id from a quantize scale (the original chart styled
    /// these as `q{id}-{buckets}` classes).
    Bucket(u32),
    /// Concrete color from a sequential scale or a `special` override.
    Color(String),
}

/// One month's boundary, in grid units and as SVG path data.
#[derive(Debug, Clone, Serialize)]
pub struct OutlinePath {
    /// Month (1..=12) the outline encloses.
    pub month: u8,
    /// SVG path data scaled by the configured cell size.
    pub path: String,
    /// Closed vertex path in grid units.
    pub vertices: Vec<GridPoint>,
}
