//! Strictly Bowling library - a contract-checked ten-pin bowling scorer
//!
//! Feed one delivery at a time and ask for the score at any point.
//!
//! # Architecture
//!
//! - **Delivery**: a validated pin count (0-10)
//! - **Frame**: state machine over up to two deliveries with the 10-pin cap
//! - **Game**: routes deliveries to frames, owes bonus balls after frame ten,
//!   and scores frames by looking ahead into the next one or two frames
//! - **Contracts**: preconditions on every roll, invariants after each roll
//!   in debug builds
//!
//! # Example
//!
//! ```
//! use strictly_bowling::{Game, RollError};
//!
//! let mut game = Game::new();
//! game.roll(2).unwrap();
//! game.roll(3).unwrap();
//! game.roll(10).unwrap();
//! assert!(matches!(game.roll(11), Err(RollError::OutOfRange(11))));
//! game.roll(5).unwrap();
//! game.roll(3).unwrap();
//!
//! let report = game.score();
//! assert_eq!(*report.total_score(), 31);
//! assert_eq!(report.accumulated_frame_score(), &vec![5, 23, 31]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod scoreboard;

// Crate-level exports - Configuration
pub use config::{ConfigError, OutputFormat, ScoreboardConfig};

// Crate-level exports - Bowling engine
pub use games::bowling::{
    CANONICAL_FRAMES, Contract, Delivery, Frame, FrameState, Game, GameNotComplete, GameStatus,
    LegalRoll, MAX_PINS, Mark, PinsStanding, Roll, RollContract, RollError, ScoreReport,
    accumulated_scores, frame_score, total_score,
};

// Crate-level exports - Scoreboard
pub use scoreboard::{PlayEvent, ScoreboardError, play, score_rolls};

// Crate-level exports - Invariants
pub use games::bowling::invariants;
