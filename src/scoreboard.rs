//! Scoreboard front end: scores a batch of deliveries or plays a game line by line.
//!
//! Both drivers write to any [`Write`] sink so the binary can hand them
//! stdout and tests can hand them a buffer.

use crate::config::{OutputFormat, ScoreboardConfig};
use crate::games::bowling::{Game, Roll, RollError, ScoreReport};
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Errors raised while driving the scoreboard.
#[derive(Debug, derive_more::Display)]
pub enum ScoreboardError {
    /// A delivery was rejected in strict mode.
    #[display("Delivery {} rejected: {}", pins, reason)]
    Rejected {
        /// Pin count that was offered.
        pins: i32,
        /// Why the game refused it.
        reason: RollError,
    },

    /// Reading input or writing output failed.
    #[display("I/O error: {}", _0)]
    Io(std::io::Error),

    /// Encoding a JSON report failed.
    #[display("JSON error: {}", _0)]
    Json(serde_json::Error),
}

impl std::error::Error for ScoreboardError {}

impl From<std::io::Error> for ScoreboardError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ScoreboardError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// One line of `play` output in JSON mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayEvent {
    /// The delivery recorded on this line, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted: Option<Roll>,
    /// Why the line was refused, if it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<String>,
    /// Game status after the line.
    pub status: String,
    /// Score report after the line.
    pub score: ScoreReport,
}

/// Scores a full sequence of deliveries and writes the report to `out`.
///
/// Rejected deliveries are logged and skipped, unless the config is strict,
/// in which case the first one aborts without writing a report.
#[instrument(skip(rolls, config, out), fields(format = %config.format(), strict = config.strict()))]
pub fn score_rolls<W: Write>(
    rolls: impl IntoIterator<Item = i32>,
    config: &ScoreboardConfig,
    out: &mut W,
) -> Result<Game, ScoreboardError> {
    let mut game = Game::new();
    for pins in rolls {
        match game.roll(pins) {
            Ok(roll) => debug!(%roll, "Delivery accepted"),
            Err(reason) if *config.strict() => {
                warn!(pins, error = %reason, "Delivery rejected in strict mode");
                return Err(ScoreboardError::Rejected { pins, reason });
            }
            Err(e) => warn!(pins, error = %e, "Delivery ignored"),
        }
    }
    info!(total = *game.score().total_score(), "Deliveries scored");

    match config.format() {
        OutputFormat::Text => {
            writeln!(out, "{}", game.score())?;
            writeln!(out, "{}", game.status())?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &game.score())?;
            writeln!(out)?;
        }
    }

    Ok(game)
}

/// Reads deliveries from `input` until end of input, `quit`, or game completion.
///
/// Every non-blank line produces output: the accepted roll or the rejection,
/// followed by the running score. Lines that are not pin counts are rejected
/// the same way as illegal deliveries.
#[instrument(skip(input, config, out), fields(format = %config.format()))]
pub fn play<R: BufRead, W: Write>(
    input: R,
    config: &ScoreboardConfig,
    out: &mut W,
) -> Result<Game, ScoreboardError> {
    info!("Starting interactive game");

    let mut game = Game::new();
    if *config.format() == OutputFormat::Text {
        writeln!(out, "Enter pins per delivery, one per line ('quit' to stop)")?;
    }

    for line in input.lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            debug!("Player quit");
            break;
        }

        let outcome = match input.parse::<i32>() {
            Ok(pins) => game.roll(pins).map_err(|e| e.to_string()),
            Err(_) => Err(format!("'{}' is not a pin count", input)),
        };
        if let Err(reason) = &outcome {
            warn!(input, %reason, "Delivery rejected");
        }

        match config.format() {
            OutputFormat::Text => {
                match &outcome {
                    Ok(roll) => writeln!(out, "{}", roll)?,
                    Err(reason) => writeln!(out, "Rejected: {}", reason)?,
                }
                writeln!(out, "{}", game.score())?;
                writeln!(out, "{}", game.status())?;
                writeln!(out)?;
            }
            OutputFormat::Json => {
                let (accepted, rejected) = match outcome {
                    Ok(roll) => (Some(roll), None),
                    Err(reason) => (None, Some(reason)),
                };
                let event = PlayEvent {
                    accepted,
                    rejected,
                    status: game.status().to_string(),
                    score: game.score(),
                };
                serde_json::to_writer(&mut *out, &event)?;
                writeln!(out)?;
            }
        }

        if game.is_complete() {
            info!(total = *game.score().total_score(), "Game complete");
            break;
        }
    }

    Ok(game)
}
