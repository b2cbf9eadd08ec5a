//! CLI command definitions.

pub mod expand;

use clap::{Parser, Subcommand, ValueEnum};

/// Expand recurring events into concrete occurrences.
#[derive(Debug, Parser)]
#[command(name = "cadence")]
#[command(version, about = "Expand recurring events into concrete occurrences", long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Expand the recurring events in a JSON file.
    Expand(expand::ExpandCommand),
    /// List the registered recurrence strategies.
    Strategies {
        /// Safety limit span to report (e.g. "+5 year").
        #[arg(long, env = "CADENCE_SAFETY_LIMIT")]
        safety_limit: Option<String>,
    },
}
