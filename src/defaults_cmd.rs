//! Defaults command: print the default configuration template.

use anyhow::{Context, Result};

/// Print the default config tree as pretty JSON.
pub fn run() -> Result<()> {
    let json = serde_json::to_string_pretty(nuwe_config::default_config())
        .context("failed to serialize default config")?;
    println!("{json}");
    Ok(())
}
