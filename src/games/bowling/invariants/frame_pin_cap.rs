//! Pin cap invariant: no frame holds more than ten pins.

use super::super::{Game, MAX_PINS};
use super::Invariant;

/// Invariant: every frame's recorded pins total at most ten.
pub struct FramePinCapInvariant;

impl Invariant<Game> for FramePinCapInvariant {
    fn holds(game: &Game) -> bool {
        game.frames()
            .iter()
            .all(|frame| frame.score() <= u32::from(MAX_PINS))
    }

    fn description() -> &'static str {
        "No frame holds more than ten pins"
    }
}
