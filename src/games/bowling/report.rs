//! Score report snapshot and scoreboard rendering.

use super::frame::Frame;
use super::scoring::{accumulated_scores, total_score};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Snapshot of a game's scores.
///
/// Recomputed from the frames on every query and holds no state of its own.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    /// Sum of the ten canonical frame scores.
    total_score: u32,
    /// Strike flag per existing frame, bonus frames included.
    strikes: Vec<bool>,
    /// Spare flag per existing frame, bonus frames included.
    spares: Vec<bool>,
    /// Running total after each existing canonical frame.
    accumulated_frame_score: Vec<u32>,
    /// Pins per roll, frame by frame. A strike is followed by a literal 0.
    pins_per_roll: Vec<u8>,
}

impl ScoreReport {
    /// Builds the report for a frame sequence.
    #[instrument(skip(frames), fields(frames = frames.len()))]
    pub fn from_frames(frames: &[Frame]) -> Self {
        let mut pins_per_roll = Vec::with_capacity(frames.len() * 2);
        for frame in frames {
            pins_per_roll.push(frame.score_first_roll().unwrap_or(0));
            if let Some(second) = frame.second_roll() {
                pins_per_roll.push(second);
            }
        }

        Self {
            total_score: total_score(frames),
            strikes: frames.iter().map(Frame::is_strike).collect(),
            spares: frames.iter().map(Frame::is_spare).collect(),
            accumulated_frame_score: accumulated_scores(frames),
            pins_per_roll,
        }
    }

    /// Per-frame roll marks as shown on a scoreboard (`X`, `/`, `-`, digits).
    ///
    /// Every frame but the last contributes two log entries; the last may
    /// contribute one when it is still open.
    pub fn frame_marks(&self) -> Vec<String> {
        let mut marks = Vec::with_capacity(self.strikes.len());
        let mut rolls = self.pins_per_roll.iter().copied();

        for (&strike, &spare) in self.strikes.iter().zip(&self.spares) {
            let first = rolls.next().unwrap_or(0);
            let second = rolls.next();
            let mark = if strike {
                "X".to_string()
            } else {
                match second {
                    Some(_) if spare => format!("{}/", pin_symbol(first)),
                    Some(second) => format!("{}{}", pin_symbol(first), pin_symbol(second)),
                    None => pin_symbol(first),
                }
            };
            marks.push(mark);
        }
        marks
    }
}

fn pin_symbol(pins: u8) -> String {
    if pins == 0 {
        "-".to_string()
    } else {
        pins.to_string()
    }
}

impl std::fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marks = self.frame_marks();

        write!(f, "Frame")?;
        for number in 1..=marks.len() {
            write!(f, " |{:>4}", number)?;
        }
        writeln!(f)?;

        write!(f, "Rolls")?;
        for mark in &marks {
            write!(f, " |{:>4}", mark)?;
        }
        writeln!(f)?;

        write!(f, "Score")?;
        for total in &self.accumulated_frame_score {
            write!(f, " |{:>4}", total)?;
        }
        writeln!(f)?;

        write!(f, "Total: {}", self.total_score)
    }
}
