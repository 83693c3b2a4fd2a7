//! History consistency invariant: the roll history matches the frames.

use super::super::Game;
use super::Invariant;

/// Invariant: the accepted-roll history lists exactly the physical
/// deliveries held in the frames, in order and with matching frame numbers.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let recorded: Vec<(usize, u8)> = game
            .frames()
            .iter()
            .enumerate()
            .flat_map(|(index, frame)| {
                frame
                    .physical_pins()
                    .into_iter()
                    .map(move |pins| (index + 1, pins))
            })
            .collect();

        let history: Vec<(usize, u8)> = game
            .history()
            .iter()
            .map(|roll| (roll.frame, roll.pins()))
            .collect();

        recorded == history
    }

    fn description() -> &'static str {
        "Roll history matches the deliveries held in the frames"
    }
}
