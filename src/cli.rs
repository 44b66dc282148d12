use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Nuwe calendar heatmap builder.
#[derive(Parser)]
#[command(
    name = "nuwe",
    version,
    about = "Calendar heatmap construction: config in, renderer-ready descriptors out"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Build the chart descriptors from a JSON config file.
    Render(RenderArgs),
    /// Print the default configuration template.
    Defaults,
}

/// Arguments for the `render` subcommand.
#[derive(clap::Args)]
pub struct RenderArgs {
    /// Path to JSON configuration file.
    #[arg(short, long, default_value = "nuwe.json")]
    pub config: PathBuf,

    /// Path for the chart JSON output (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
