//! cadence CLI entry point.

use anyhow::{bail, Context, Result};
use cadence_cli::cli::{Cli, Commands, OutputFormat};
use cadence_cli::output::{json, pretty};
use cadence_cli::run::{expand_events, list_strategies};
use cadence_cli::{input, Config};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JSON output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cadence=info,cadence_cli=info,cadence_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Expand(expand) => {
            let config = Config::from_env().with_overrides(expand.safety_limit.clone(), expand.limit);
            let safety_limit = config
                .safety_limit()
                .with_context(|| format!("invalid safety limit {:?}", config.safety_limit))?;
            let window = expand.window()?;

            let events = input::read_events(&expand.input)
                .with_context(|| format!("failed to read events from {}", expand.input.display()))?;
            let outcome = expand_events(events, window, config.default_limit, safety_limit);

            match cli.format {
                OutputFormat::Json => println!("{}", json::format_json(&outcome.occurrences)),
                OutputFormat::Pretty => println!("{}", pretty::format_occurrences(&outcome.occurrences)),
            }

            if !cli.quiet {
                for rejected in &outcome.rejected {
                    eprintln!("{}", pretty::format_rejected(rejected));
                }
                for failure in &outcome.failures {
                    eprintln!("event #{} failed to expand: {}", failure.index, failure.error);
                }
            }

            if expand.fail_fast && !outcome.is_clean() {
                bail!(
                    "{} event(s) rejected, {} event(s) failed to expand",
                    outcome.rejected.len(),
                    outcome.failures.len()
                );
            }
        }
        Commands::Strategies { safety_limit } => {
            let config = Config::from_env().with_overrides(safety_limit, None);
            let strategies = list_strategies(config.safety_limit()?);
            match cli.format {
                OutputFormat::Json => println!("{}", json::format_json(&strategies)),
                OutputFormat::Pretty => println!("{}", pretty::format_strategies(&strategies)),
            }
        }
    }

    Ok(())
}
