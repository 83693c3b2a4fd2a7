//! Command-line interface for strictly_bowling.

use clap::{Parser, Subcommand};
use strictly_bowling::OutputFormat;

/// Strictly Bowling - ten-pin bowling scorer
#[derive(Parser, Debug)]
#[command(name = "strictly_bowling")]
#[command(about = "Score a ten-pin bowling game one delivery at a time", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (ignored if missing)
    #[arg(long, global = true, default_value = "bowling.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a complete sequence of deliveries
    Score {
        /// Pins knocked down per delivery, in order
        #[arg(required = true, allow_negative_numbers = true)]
        rolls: Vec<i32>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Fail on the first rejected delivery
        #[arg(long)]
        strict: bool,
    },

    /// Read deliveries from stdin, one per line, and print the running score
    Play {
        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}
