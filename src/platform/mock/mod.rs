//! Mock platform implementation for testing
//!
//! Drivers run against a simulated register bank instead of the chip. Time
//! is simulated in TPM input clocks and only advances when a test says so.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled

#![cfg(any(test, feature = "mock"))]

mod platform;
mod registers;

pub use platform::MockPlatform;
pub use registers::SimulatedRegisters;
