//! TPM Delay Driver
//!
//! Cycle-based delay generator on one Timer/PWM Module of the KL25Z.
//!
//! ## Features
//!
//! - Three instances (TPM0..TPM2), one owner each
//! - Prescaler 1..128 from the selected TPM clock source
//! - One session of up to 0xFFFF ticks, polled via the overflow flag
//! - Blocking microsecond/millisecond delays of any length
//! - embedded-hal 0.2 `DelayUs`, `DelayMs`, `CountDown` and `Cancel`
//!
//! ## Usage
//!
//! ```ignore
//! use kl25z_hal::devices::tpm::TpmConfig;
//! use kl25z_hal::platform::Platform;
//! use kl25z_hal::Divider;
//!
//! let mut tpm = platform.create_delay(2, TpmConfig::with_divider(Divider::Div128))?;
//! tpm.start_delay(0xFFFF)?;
//! while tpm.timeout_delay() == DelayStatus::Running {
//!     // other work
//! }
//! ```

mod config;
mod driver;
mod hal;
pub mod registers;

pub use config::{DebugMode, TpmConfig, TpmInstance, DEFAULT_INPUT_CLOCK_HZ};
pub use driver::TpmDelay;
