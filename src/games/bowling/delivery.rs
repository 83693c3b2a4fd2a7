//! A single validated delivery.

use super::action::RollError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Pins standing at the start of every frame.
pub const MAX_PINS: u8 = 10;

/// One physical throw of the ball.
///
/// A `Delivery` always holds a pin count in `0..=10`. Out-of-range values
/// are rejected by [`Delivery::try_new`] and never reach a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "u8")]
pub struct Delivery {
    pins: u8,
}

impl Delivery {
    /// Validates a raw pin count.
    ///
    /// # Errors
    ///
    /// Returns `RollError::OutOfRange` if `pins` is negative or above ten.
    #[instrument]
    pub fn try_new(pins: i32) -> Result<Self, RollError> {
        match u8::try_from(pins) {
            Ok(pins) if pins <= MAX_PINS => Ok(Self { pins }),
            _ => {
                debug!(pins, "Delivery out of range");
                Err(RollError::OutOfRange(pins))
            }
        }
    }

    /// Pins knocked down.
    pub fn pins(self) -> u8 {
        self.pins
    }

    /// True when every pin fell.
    pub fn is_strike(self) -> bool {
        self.pins == MAX_PINS
    }
}

impl TryFrom<i32> for Delivery {
    type Error = RollError;

    fn try_from(pins: i32) -> Result<Self, Self::Error> {
        Self::try_new(pins)
    }
}

impl From<Delivery> for u8 {
    fn from(delivery: Delivery) -> Self {
        delivery.pins
    }
}

impl std::fmt::Display for Delivery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pins)
    }
}
