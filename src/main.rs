//! Strictly Bowling - command-line scorer
//!
//! Scores a whole sequence of deliveries or plays one interactively from stdin.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_bowling::{ScoreboardConfig, play, score_rolls};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ScoreboardConfig::load_or_default(&cli.config)?;
    initialize_tracing(config.log_filter());

    match cli.command {
        Command::Score {
            rolls,
            format,
            strict,
        } => run_score(rolls, config.with_overrides(format, strict)),
        Command::Play { format } => run_play(config.with_overrides(format, false)),
    }
}

/// Score a full sequence of deliveries and print the report
#[instrument(skip(config))]
fn run_score(rolls: Vec<i32>, config: ScoreboardConfig) -> Result<()> {
    info!(count = rolls.len(), "Scoring deliveries");
    score_rolls(rolls, &config, &mut std::io::stdout().lock())?;
    Ok(())
}

/// Play a game from stdin
#[instrument(skip(config))]
fn run_play(config: ScoreboardConfig) -> Result<()> {
    play(std::io::stdin().lock(), &config, &mut std::io::stdout().lock())?;
    Ok(())
}

/// Initialize tracing on stderr; `RUST_LOG` wins over the configured filter
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
