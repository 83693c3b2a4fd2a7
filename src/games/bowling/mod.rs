mod action;
mod contracts;
mod delivery;
mod frame;
mod game;
mod phases;
mod report;
mod scoring;

pub mod invariants;

pub use action::{Mark, Roll, RollError};
pub use contracts::{Contract, GameNotComplete, LegalRoll, PinsStanding, RollContract};
pub use delivery::{Delivery, MAX_PINS};
pub use frame::{Frame, FrameState};
pub use game::Game;
pub use phases::GameStatus;
pub use report::ScoreReport;
pub use scoring::{CANONICAL_FRAMES, accumulated_scores, frame_score, total_score};
