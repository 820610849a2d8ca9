//! Device drivers
//!
//! Drivers are written against [`RegisterInterface`](crate::platform::traits::RegisterInterface)
//! and run unchanged on the chip and on the simulated register bank.
//!
//! ## Modules
//!
//! - `sim`: clock gating and TPM clock source selection
//! - `tpm`: TPM delay driver
//! - `gpio`: GPIO line driver

pub mod gpio;
pub mod sim;
pub mod tpm;
