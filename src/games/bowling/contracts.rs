//! Contract-based validation for deliveries.
//!
//! Contracts formalize Hoare-style reasoning: {P} roll {Q}. Preconditions
//! run on every roll; postconditions run in debug builds.

use super::action::RollError;
use super::delivery::Delivery;
use super::game::Game;
use super::invariants::{BowlingInvariants, InvariantSet};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), RollError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), RollError>;
}

// ─────────────────────────────────────────────────────────────
//  Roll Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game still accepts deliveries.
pub struct GameNotComplete;

impl GameNotComplete {
    /// Fails with `GameComplete` once frames and bonus balls are used up.
    #[instrument(skip(game))]
    pub fn check(delivery: &Delivery, game: &Game) -> Result<(), RollError> {
        if game.is_complete() {
            Err(RollError::GameComplete)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the delivery knocks down no more pins than are standing.
pub struct PinsStanding;

impl PinsStanding {
    /// Fails with `ExceedsStanding` when the current frame cannot hold the pins.
    #[instrument(skip(game))]
    pub fn check(delivery: &Delivery, game: &Game) -> Result<(), RollError> {
        let standing = game.pins_standing();
        if delivery.pins() > standing {
            Err(RollError::ExceedsStanding {
                standing,
                attempted: delivery.pins(),
            })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a roll is legal if the game is live and the pins are standing.
pub struct LegalRoll;

impl LegalRoll {
    /// Validates all preconditions for a roll.
    #[instrument(skip(game))]
    pub fn check(delivery: &Delivery, game: &Game) -> Result<(), RollError> {
        GameNotComplete::check(delivery, game)?;
        PinsStanding::check(delivery, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Roll Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for roll actions.
///
/// Preconditions:
/// - Game is not complete
/// - Delivery fits the pins standing
///
/// Postconditions:
/// - Every invariant in [`BowlingInvariants`] holds
/// - Exactly one delivery was added to the history
pub struct RollContract;

impl Contract<Game, Delivery> for RollContract {
    fn pre(game: &Game, action: &Delivery) -> Result<(), RollError> {
        LegalRoll::check(action, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), RollError> {
        if after.history().len() != before.history().len() + 1 {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "History did not grow by one roll"
            );
            return Err(RollError::InvariantViolation(
                "Postcondition failed: history must grow by exactly one roll".to_string(),
            ));
        }

        BowlingInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant check failed");
            RollError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::bowling::{Delivery, FrameState};

    fn delivery(pins: i32) -> Delivery {
        Delivery::try_new(pins).unwrap()
    }

    #[test]
    fn test_precondition_fresh_frame() {
        let game = Game::new();
        assert!(RollContract::pre(&game, &delivery(10)).is_ok());
    }

    #[test]
    fn test_precondition_pins_standing() {
        let game = Game::replay([7]);
        assert!(RollContract::pre(&game, &delivery(3)).is_ok());
        assert_eq!(
            RollContract::pre(&game, &delivery(4)),
            Err(RollError::ExceedsStanding {
                standing: 3,
                attempted: 4
            })
        );
    }

    #[test]
    fn test_precondition_game_complete() {
        let game = Game::replay([1; 20]);
        assert!(game.is_complete());
        assert_eq!(
            RollContract::pre(&game, &delivery(0)),
            Err(RollError::GameComplete)
        );
    }

    #[test]
    fn test_postcondition_holds_after_roll() {
        let before = Game::replay([3]);
        let mut after = before.clone();
        after.roll(5).unwrap();
        assert!(RollContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Game::replay([3]);
        let mut after = before.clone();
        after.roll(5).unwrap();

        after.frames[0].state = FrameState::Full(delivery(9), delivery(5));
        assert!(matches!(
            RollContract::post(&before, &after),
            Err(RollError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_requires_history_growth() {
        let before = Game::replay([3]);
        assert!(RollContract::post(&before, &before).is_err());
    }
}
