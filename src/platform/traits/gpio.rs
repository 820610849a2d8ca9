//! Digital line interface trait
//!
//! This module defines the single-pin GPIO interface that platform implementations must provide.

use crate::platform::Result;

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Input (reset state)
    #[default]
    Input,
    /// Push-pull output
    Output,
}

/// Internal pull resistor selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// No pull resistor
    #[default]
    None,
    /// Pull-up resistor
    Up,
}

/// Digital line interface trait
///
/// # Safety Invariants
///
/// - Only one owner per pin
/// - Pin must be routed to GPIO before use (done at construction)
pub trait DigitalLine {
    /// Set pin direction
    fn set_direction(&mut self, direction: Direction);

    /// Get current pin direction
    fn direction(&self) -> Direction;

    /// Select the internal pull resistor
    fn set_pull(&mut self, pull: Pull);

    /// Read the pin level
    ///
    /// Valid in both directions; an output reads back the driven level.
    fn read_bit(&self) -> bool;

    /// Set the output latch high (`true`) or low (`false`)
    ///
    /// Accepted in either direction. On an input pin the level is held and
    /// driven once the pin becomes an output. Register-backed lines never
    /// return an error.
    fn write_bit(&mut self, high: bool) -> Result<()>;

    /// Invert the output latch, in either direction
    fn toggle_bit(&mut self) -> Result<()>;
}
