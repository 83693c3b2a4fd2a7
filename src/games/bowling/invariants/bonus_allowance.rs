//! Bonus allowance invariant: frames past the tenth only hold earned bonus balls.

use super::super::{CANONICAL_FRAMES, Game};
use super::Invariant;

/// Invariant: deliveries after frame ten never exceed the bonus allowance.
///
/// A tenth-frame strike earns two bonus balls, a spare one, an open frame
/// none. Bonus frames may only exist once frame ten is full.
pub struct BonusAllowanceInvariant;

impl Invariant<Game> for BonusAllowanceInvariant {
    fn holds(game: &Game) -> bool {
        let frames = game.frames();
        if frames.len() <= CANONICAL_FRAMES {
            return true;
        }

        let tenth_full = frames[CANONICAL_FRAMES - 1].is_full();
        tenth_full && game.bonus_rolls_thrown() <= game.bonus_allowance()
    }

    fn description() -> &'static str {
        "Bonus deliveries stay within the tenth frame's allowance"
    }
}
