//! Typed resolution of the merged configuration tree.

use serde::Deserialize;
use serde_json::Value;

use nuwe_index::{DateValueRecord, TimeRangeConfig};
use nuwe_scale::ValueScaleConfig;

use crate::defaults::default_config;
use crate::error::ConfigError;
use crate::merge::merge;

/// The fully resolved chart configuration.
///
/// Unknown keys the user added for their own renderer survive in the
/// [`tree`](ResolvedConfig::tree) but are ignored by the typed view.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The merged JSON tree (defaults overlaid with user input).
    pub tree: Value,
    /// The typed view the pipeline consumes.
    pub chart: ChartConfig,
}

/// Typed chart configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    /// Input data and its date scheme.
    pub data: DataConfig,
    /// Presentation and scale options.
    pub options: OptionsConfig,
}

/// The `data` section: scheme plus records.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// How record date strings are interpreted.
    pub scheme: SchemeConfig,
    /// The sparse `(date, value)` records, in input order.
    #[serde(default)]
    pub data: Vec<DateValueRecord>,
}

/// The date scheme for record parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemeConfig {
    /// Date pattern, e.g. `YYYY-MM-DD`.
    pub date: String,
}

/// The `options` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionsConfig {
    /// Panel and cell dimensions.
    pub size: SizeConfig,
    /// Value and time scales.
    pub scales: ScalesConfig,
}

/// Panel and cell dimensions in pixels.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SizeConfig {
    /// Panel width.
    pub width: f64,
    /// Panel height.
    pub height: f64,
    /// Side length of one day cell.
    pub cell_size: f64,
}

/// The `options.scales` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ScalesConfig {
    /// Value-to-color scale.
    pub value: ValueScaleConfig,
    /// Year span of the chart.
    pub time: TimeRangeConfig,
}

/// Resolves a raw user configuration tree.
///
/// Deep-merges `user` onto the default template, then deserializes the
/// merged tree into [`ChartConfig`]. Scale semantics are not validated
/// here; only structure and the tagged `type` fields are.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] when the merged tree is structurally
/// unusable: a required field replaced by the wrong type, or an unknown
/// `type` tag on a scale.
pub fn resolve(user: &Value) -> Result<ResolvedConfig, ConfigError> {
    let tree = merge(default_config(), user);
    let chart: ChartConfig =
        serde_json::from_value(tree.clone()).map_err(|e| ConfigError::Invalid {
            reason: e.to_string(),
        })?;
    Ok(ResolvedConfig { tree, chart })
}
