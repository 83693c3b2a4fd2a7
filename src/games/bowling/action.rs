//! First-class roll records and roll errors.
//!
//! An accepted roll is a domain event, not a side effect. The game returns
//! one for every delivery it records and keeps them as its history.

use super::delivery::Delivery;
use serde::{Deserialize, Serialize};

/// How a roll left its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    /// First-ball ten.
    Strike,
    /// Second ball cleared the remaining pins.
    Spare,
    /// Frame completed with pins still standing.
    Open,
    /// Frame still waiting for its second ball.
    Pending,
}

/// An accepted delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roll {
    /// 1-based frame number the delivery landed in (11 and 12 hold bonus balls).
    pub frame: usize,
    /// The delivery itself.
    pub delivery: Delivery,
    /// Frame mark after this delivery.
    pub mark: Mark,
}

impl Roll {
    /// Creates a roll record.
    pub fn new(frame: usize, delivery: Delivery, mark: Mark) -> Self {
        Self {
            frame,
            delivery,
            mark,
        }
    }

    /// Pins knocked down by this roll.
    pub fn pins(&self) -> u8 {
        self.delivery.pins()
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Frame {}: {} ({})", self.frame, self.delivery, self.mark)
    }
}

/// Reasons a delivery is not recorded.
///
/// A rejected delivery never changes game or frame state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RollError {
    /// Pin count outside `0..=10`.
    #[display("Pin count {} is out of range (0-10)", _0)]
    OutOfRange(i32),

    /// The delivery would put more than ten pins in one frame.
    #[display("Only {} pins standing, cannot knock down {}", standing, attempted)]
    ExceedsStanding {
        /// Pins left standing in the frame.
        standing: u8,
        /// Pins claimed by the delivery.
        attempted: u8,
    },

    /// The frame already holds all its deliveries.
    #[display("Frame is already full")]
    FrameFull,

    /// No frame or bonus ball is left to play.
    #[display("Game is already complete")]
    GameComplete,

    /// A postcondition failed after the roll was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for RollError {}
