//! Frame state machine.
//!
//! A frame moves `Empty -> OneRoll -> Full`, or `Empty -> Strike` when the
//! first ball is a ten. A strike still reads as two slots for scoring, with
//! a second slot of zero that is derived on demand and never stored.

use super::action::{Mark, RollError};
use super::delivery::{Delivery, MAX_PINS};
use tracing::{debug, instrument};

/// Where a frame is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display)]
pub enum FrameState {
    /// No delivery yet.
    #[default]
    Empty,
    /// First delivery recorded, pins still standing.
    OneRoll(Delivery),
    /// Ten on the first delivery.
    Strike,
    /// Two deliveries recorded.
    Full(Delivery, Delivery),
}

/// Up to two deliveries scored together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Frame {
    pub(crate) state: FrameState,
}

impl Frame {
    /// Creates an empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    pub fn state(&self) -> FrameState {
        self.state
    }

    /// Validates a raw pin count and places it.
    ///
    /// # Errors
    ///
    /// Any [`RollError`] from validation or [`Frame::place`]. The frame is
    /// unchanged on error.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn roll(&mut self, pins: i32) -> Result<FrameState, RollError> {
        let delivery = Delivery::try_new(pins)?;
        self.place(delivery)
    }

    /// Records a validated delivery in the first free slot.
    ///
    /// # Errors
    ///
    /// - `RollError::FrameFull` when the frame has no free slot.
    /// - `RollError::ExceedsStanding` when the two deliveries would total more
    ///   than ten pins.
    #[instrument(skip(self), fields(state = %self.state, pins = delivery.pins()))]
    pub fn place(&mut self, delivery: Delivery) -> Result<FrameState, RollError> {
        let next = match self.state {
            FrameState::Empty if delivery.is_strike() => FrameState::Strike,
            FrameState::Empty => FrameState::OneRoll(delivery),
            FrameState::OneRoll(first) => {
                let standing = MAX_PINS - first.pins();
                if delivery.pins() > standing {
                    return Err(RollError::ExceedsStanding {
                        standing,
                        attempted: delivery.pins(),
                    });
                }
                FrameState::Full(first, delivery)
            }
            FrameState::Strike | FrameState::Full(..) => return Err(RollError::FrameFull),
        };

        debug!(from = %self.state, to = %next, "Frame transition");
        self.state = next;
        Ok(next)
    }

    /// True once the frame takes no more deliveries.
    pub fn is_full(&self) -> bool {
        matches!(self.state, FrameState::Strike | FrameState::Full(..))
    }

    /// True when the first ball was a ten.
    pub fn is_strike(&self) -> bool {
        matches!(self.state, FrameState::Strike)
    }

    /// True when two balls cleared all ten pins.
    pub fn is_spare(&self) -> bool {
        match self.state {
            FrameState::Full(first, second) => first.pins() + second.pins() == MAX_PINS,
            _ => false,
        }
    }

    /// Pins recorded in this frame, without bonuses.
    pub fn score(&self) -> u32 {
        match self.state {
            FrameState::Empty => 0,
            FrameState::OneRoll(first) => u32::from(first.pins()),
            FrameState::Strike => u32::from(MAX_PINS),
            FrameState::Full(first, second) => u32::from(first.pins() + second.pins()),
        }
    }

    /// First-ball pins, or `None` before the first delivery.
    pub fn score_first_roll(&self) -> Option<u8> {
        match self.state {
            FrameState::Empty => None,
            FrameState::OneRoll(first) | FrameState::Full(first, _) => Some(first.pins()),
            FrameState::Strike => Some(MAX_PINS),
        }
    }

    /// Second-slot pins once the frame is full. A strike reads as zero.
    pub fn second_roll(&self) -> Option<u8> {
        match self.state {
            FrameState::Full(_, second) => Some(second.pins()),
            FrameState::Strike => Some(0),
            FrameState::Empty | FrameState::OneRoll(_) => None,
        }
    }

    /// Deliveries actually thrown into this frame.
    pub fn physical_rolls(&self) -> usize {
        match self.state {
            FrameState::Empty => 0,
            FrameState::OneRoll(_) | FrameState::Strike => 1,
            FrameState::Full(..) => 2,
        }
    }

    /// Pins of each delivery actually thrown, in order.
    pub fn physical_pins(&self) -> Vec<u8> {
        match self.state {
            FrameState::Empty => Vec::new(),
            FrameState::OneRoll(first) => vec![first.pins()],
            FrameState::Strike => vec![MAX_PINS],
            FrameState::Full(first, second) => vec![first.pins(), second.pins()],
        }
    }

    /// Pins the next delivery may knock down (zero once full).
    pub fn pins_standing(&self) -> u8 {
        match self.state {
            FrameState::Empty => MAX_PINS,
            FrameState::OneRoll(first) => MAX_PINS - first.pins(),
            FrameState::Strike | FrameState::Full(..) => 0,
        }
    }

    /// Mark describing the frame as it stands.
    pub fn mark(&self) -> Mark {
        match self.state {
            FrameState::Strike => Mark::Strike,
            FrameState::Full(..) if self.is_spare() => Mark::Spare,
            FrameState::Full(..) => Mark::Open,
            FrameState::Empty | FrameState::OneRoll(_) => Mark::Pending,
        }
    }
}
