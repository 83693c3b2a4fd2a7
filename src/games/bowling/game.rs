//! Game-level aggregator: routes deliveries to frames and scores them.

use super::action::{Roll, RollError};
use super::contracts::{Contract, RollContract};
use super::delivery::{Delivery, MAX_PINS};
use super::frame::Frame;
use super::phases::GameStatus;
use super::report::ScoreReport;
use super::scoring::CANONICAL_FRAMES;
use tracing::{debug, instrument};

/// A single bowling game.
///
/// Starts with one empty frame. Frames are only ever appended: ten canonical
/// frames, plus up to two more holding bonus balls earned in frame ten.
///
/// Contract enforcement:
/// - Preconditions checked always ([`RollContract`])
/// - Postconditions checked in debug builds only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) frames: Vec<Frame>,
    pub(crate) history: Vec<Roll>,
}

impl Game {
    /// Creates a game with a single empty frame.
    #[instrument]
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::new()],
            history: Vec::new(),
        }
    }

    /// Records a delivery.
    ///
    /// The delivery lands in the open frame, or in a newly appended frame
    /// when the last one is full. A rejected delivery leaves the game
    /// untouched.
    ///
    /// # Errors
    ///
    /// - `RollError::OutOfRange` for pin counts outside `0..=10`
    /// - `RollError::ExceedsStanding` when the frame cannot hold the pins
    /// - `RollError::GameComplete` once frames and bonus balls are used up
    /// - `RollError::InvariantViolation` if a debug-build postcondition fails
    #[instrument(skip(self), fields(frame = self.current_frame()))]
    pub fn roll(&mut self, pins: i32) -> Result<Roll, RollError> {
        let delivery = Delivery::try_new(pins)?;
        RollContract::pre(self, &delivery)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let (index, mut frame) = match self.frames.last() {
            Some(frame) if !frame.is_full() => (self.frames.len() - 1, *frame),
            _ => (self.frames.len(), Frame::new()),
        };
        frame.place(delivery)?;

        if index == self.frames.len() {
            self.frames.push(frame);
        } else {
            self.frames[index] = frame;
        }

        let roll = Roll::new(index + 1, delivery, frame.mark());
        self.history.push(roll);

        #[cfg(debug_assertions)]
        if let Err(e) = RollContract::post(&before, self) {
            tracing::warn!(error = %e, "Rolling back delivery");
            *self = before;
            return Err(e);
        }

        debug!(frame = roll.frame, pins = roll.pins(), mark = %roll.mark, "Roll accepted");
        Ok(roll)
    }

    /// Plays a sequence of pin counts, silently dropping rejected ones.
    #[instrument(skip(rolls))]
    pub fn replay(rolls: impl IntoIterator<Item = i32>) -> Self {
        let mut game = Self::new();
        for pins in rolls {
            if let Err(e) = game.roll(pins) {
                debug!(pins, error = %e, "Roll ignored");
            }
        }
        game
    }

    /// Builds the score report for the game so far.
    #[instrument(skip(self), fields(frames = self.frames.len()))]
    pub fn score(&self) -> ScoreReport {
        ScoreReport::from_frames(&self.frames)
    }

    /// Returns the frames, bonus frames included.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Returns the accepted rolls in order.
    pub fn history(&self) -> &[Roll] {
        &self.history
    }

    /// 1-based frame the next delivery would land in.
    pub fn current_frame(&self) -> usize {
        match self.frames.last() {
            Some(frame) if !frame.is_full() => self.frames.len(),
            _ => self.frames.len() + 1,
        }
    }

    /// Pins the next delivery may knock down; zero once the game is over.
    pub fn pins_standing(&self) -> u8 {
        if self.is_complete() {
            return 0;
        }
        match self.frames.last() {
            Some(frame) if !frame.is_full() => frame.pins_standing(),
            _ => MAX_PINS,
        }
    }

    /// Bonus balls earned in frame ten: two for a strike, one for a spare.
    pub fn bonus_allowance(&self) -> usize {
        match self.tenth_frame() {
            Some(frame) if frame.is_strike() => 2,
            Some(frame) if frame.is_spare() => 1,
            _ => 0,
        }
    }

    /// Bonus balls thrown so far.
    pub fn bonus_rolls_thrown(&self) -> usize {
        self.frames
            .iter()
            .skip(CANONICAL_FRAMES)
            .map(Frame::physical_rolls)
            .sum()
    }

    /// True once frame ten is full and every bonus ball has been thrown.
    pub fn is_complete(&self) -> bool {
        self.tenth_frame().is_some_and(Frame::is_full)
            && self.bonus_rolls_thrown() >= self.bonus_allowance()
    }

    /// Returns where the game stands.
    pub fn status(&self) -> GameStatus {
        if self.is_complete() {
            GameStatus::Complete
        } else if self.tenth_frame().is_some_and(Frame::is_full) {
            GameStatus::BonusRolls {
                remaining: self.bonus_allowance() - self.bonus_rolls_thrown(),
            }
        } else {
            GameStatus::InProgress {
                frame: self.current_frame(),
            }
        }
    }

    fn tenth_frame(&self) -> Option<&Frame> {
        self.frames.get(CANONICAL_FRAMES - 1)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
