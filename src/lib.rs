#![cfg_attr(not(any(test, feature = "mock")), no_std)]

//! kl25z_hal - Timer delay and digital line drivers for the NXP KL25Z
//!
//! This library provides a cycle-based delay generator on the TPM modules and
//! single-pin GPIO lines, written against a register-access trait so that the
//! same drivers run on the chip and on a simulated register bank.

// Platform abstraction layer
pub mod platform;

// Device drivers using platform abstraction
pub mod devices;

// Logging macros
pub mod core;

pub use devices::gpio::{GpioLine, Port};
pub use devices::tpm::{TpmConfig, TpmDelay, TpmInstance};
pub use kl25z_hal_core::delay::{DelayStatus, Divider, SessionState, TickRate};
pub use platform::{PlatformError, Result};
