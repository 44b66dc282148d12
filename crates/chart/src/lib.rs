//! Renderer-ready calendar heatmap construction.
//!
//! [`render`] is the single entry point of the core: it takes the raw user
//! configuration tree and synchronously produces everything a renderer
//! needs to draw the chart without re-deriving any date math — the resolved
//! config, a per-day cell descriptor for every day in range, and the
//! month-outline geometry, grouped into one panel per year.
//!
//! The pipeline is resolve config → build index → configure scale → lay
//! out cells and outlines. Each stage is a pure function of its inputs;
//! a chart that needs new data or config is rebuilt from scratch rather
//! than mutated.

mod descriptor;
mod error;

pub use descriptor::{CellDescriptor, CellFill, ChartRender, OutlinePath, YearPanel};
pub use error::ChartError;

use serde_json::Value;
use tracing::{debug, info};

use nuwe_calendar::{month_starts, year_days, DatePattern};
use nuwe_config::resolve;
use nuwe_grid::{cell_coordinate, cell_origin, month_outline};
use nuwe_index::{build_index, SENTINEL};
use nuwe_scale::{ScaleOutput, ValueScale};

/// Builds the complete chart description from a raw user config tree.
///
/// # Errors
///
/// Returns [`ChartError`] when the config does not resolve, the date
/// pattern or value scale is rejected, or a data record fails to parse.
/// A degenerate time range (`stop <= start`) yields an empty panel list,
/// not an error.
pub fn render(user_config: &Value) -> Result<ChartRender, ChartError> {
    let resolved = resolve(user_config)?;
    let chart = &resolved.chart;

    let pattern = DatePattern::parse_pattern(&chart.data.scheme.date)?;
    let scale = ValueScale::configure(&chart.options.scales.value)?;
    let range = chart.options.scales.time;
    let index = build_index(&range, &chart.data.data, &pattern)?;
    debug!(days = index.len(), records = chart.data.data.len(), "index built");

    let size = chart.options.size;
    let mut panels = Vec::new();
    for year in range.years() {
        let mut cells = Vec::new();
        for date in year_days(year) {
            let value = *index
                .get(&date)
                .expect("index covers every day of the configured span");
            let coord = cell_coordinate(date);
            let (x, y) = cell_origin(coord, size.cell_size);
            let key = pattern.format(date);
            let tooltip = if value == SENTINEL {
                key.clone()
            } else {
                format!("{key}: {:.1}%", value * 100.0)
            };
            cells.push(CellDescriptor {
                key,
                week: coord.week,
                weekday: coord.weekday,
                x,
                y,
                size: size.cell_size,
                value,
                fill: cell_fill(&scale, value),
                tooltip,
            });
        }

        let mut outlines = Vec::new();
        for start in month_starts(year, year + 1) {
            let outline = month_outline(year, start.month())?;
            outlines.push(OutlinePath {
                month: start.month(),
                path: outline.to_path(size.cell_size),
                vertices: outline.vertices,
            });
        }

        panels.push(YearPanel {
            year,
            // Center the 53 week columns horizontally, bottom-align the
            // 7 weekday rows, as the original chart transform did.
            origin_x: (size.width - size.cell_size * 53.0) / 2.0,
            origin_y: size.height - size.cell_size * 7.0 - 1.0,
            cells,
            outlines,
        });
    }

    info!(
        panels = panels.len(),
        cells = panels.iter().map(|p| p.cells.len()).sum::<usize>(),
        "chart constructed"
    );

    Ok(ChartRender {
        resolved: resolved.tree,
        width: size.width,
        height: size.height,
        cell_size: size.cell_size,
        panels,
    })
}

/// Assigns the display fill for one day value.
///
/// Quantize charts keep the sentinel and exact zero out of the palette
/// (the original chart's plain `day` and `day zero` classes); sequential
/// charts delegate entirely to the scale, whose `special` list handles
/// those values when configured.
fn cell_fill(scale: &ValueScale, value: f64) -> CellFill {
    match scale {
        ValueScale::Quantize(_) => {
            if value == SENTINEL {
                CellFill::NoData
            } else if value == 0.0 {
                CellFill::Zero
            } else {
                match scale.map(value) {
                    ScaleOutput::Bucket(id) => CellFill::Bucket(id),
                    ScaleOutput::Color(color) => CellFill::Color(color),
                }
            }
        }
        ValueScale::Sequential(sequential) => CellFill::Color(sequential.color(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quantize_fill_keeps_sentinel_and_zero_apart() {
        let scale = ValueScale::configure(&nuwe_scale::ValueScaleConfig::Quantize {
            domain: [1.0, 5.0],
            range: 5,
        })
        .unwrap();
        assert_eq!(cell_fill(&scale, SENTINEL), CellFill::NoData);
        assert_eq!(cell_fill(&scale, 0.0), CellFill::Zero);
        assert_eq!(cell_fill(&scale, 5.0), CellFill::Bucket(4));
    }

    #[test]
    fn degenerate_range_renders_no_panels() {
        let user = json!({
            "options": { "scales": { "time": { "start": 2017, "stop": 2016 } } }
        });
        let chart = render(&user).unwrap();
        assert!(chart.panels.is_empty());
    }

    #[test]
    fn bad_record_aborts_render() {
        let user = json!({
            "data": { "data": [{ "date": "junk", "value": 1.0 }] }
        });
        assert!(matches!(
            render(&user),
            Err(ChartError::Index { .. })
        ));
    }

    #[test]
    fn bad_pattern_aborts_render() {
        let user = json!({ "data": { "scheme": { "date": "YYYY" } } });
        assert!(matches!(render(&user), Err(ChartError::Scheme { .. })));
    }
}
