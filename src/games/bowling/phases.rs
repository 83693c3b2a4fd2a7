//! Game progress as seen by a caller.

use serde::{Deserialize, Serialize};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// A canonical frame is being played.
    InProgress {
        /// 1-based frame the next delivery goes to.
        frame: usize,
    },
    /// Frame ten earned bonus balls that are still owed.
    BonusRolls {
        /// Bonus deliveries left.
        remaining: usize,
    },
    /// Nothing left to roll.
    Complete,
}

impl GameStatus {
    /// Returns true once no delivery is accepted.
    pub fn is_complete(&self) -> bool {
        matches!(self, GameStatus::Complete)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { frame } => write!(f, "Frame {}", frame),
            GameStatus::BonusRolls { remaining: 1 } => write!(f, "1 bonus ball left"),
            GameStatus::BonusRolls { remaining } => write!(f, "{} bonus balls left", remaining),
            GameStatus::Complete => write!(f, "Game complete"),
        }
    }
}
