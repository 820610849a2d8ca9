//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations and drivers must provide.

pub mod gpio;
pub mod platform;
pub mod registers;
pub mod timer;

// Re-export trait interfaces
pub use gpio::{DigitalLine, Direction, Pull};
pub use platform::Platform;
pub use registers::RegisterInterface;
pub use timer::DelayTimer;
