//! Render command: build chart descriptors from a config file.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use serde_json::Value;

use crate::cli::RenderArgs;

/// Run the chart construction pipeline.
pub fn run(args: RenderArgs) -> Result<()> {
    let _cmd = info_span!("render").entered();

    // 1. Load the user config tree
    let raw = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let user: Value = serde_json::from_str(&raw).context("failed to parse config JSON")?;

    // 2. Build the chart
    let chart = nuwe_chart::render(&user).context("chart construction failed")?;
    info!(panels = chart.panels.len(), "chart built");

    // 3. Write descriptors
    let json =
        serde_json::to_string_pretty(&chart).context("failed to serialize chart descriptors")?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write chart output: {}", path.display()))?;
            info!(path = %path.display(), "chart descriptors written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
