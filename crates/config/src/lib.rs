//! Configuration resolution for the calendar heatmap.
//!
//! A chart is configured by a JSON tree the user supplies only partially.
//! [`resolve`] deep-merges that tree onto the immutable
//! [`default_config`] template and deserializes the result into the typed
//! [`ChartConfig`], returning both views: the raw tree for pass-through
//! consumers and the typed struct for the pipeline.
//!
//! Merging is purely structural; scale semantics (`type`, `scheme`) are
//! validated later when the scale is configured.

mod defaults;
mod error;
mod merge;
mod resolve;

pub use defaults::default_config;
pub use error::ConfigError;
pub use merge::merge;
pub use resolve::{
    resolve, ChartConfig, DataConfig, OptionsConfig, ResolvedConfig, ScalesConfig, SchemeConfig,
    SizeConfig,
};
