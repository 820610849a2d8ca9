//! Delay session types and tick math.
//!
//! The TPM delay driver in the main crate owns the registers; this module owns
//! the decisions. [`step`] is the only place where a polled overflow flag is
//! turned into a [`DelayStatus`].

pub mod divider;
pub mod rate;
pub mod session;

pub use divider::{Divider, InvalidDivider};
pub use rate::{cycles_for_ticks, TickRate, MAX_SESSION_TICKS};
pub use session::{step, DelayStatus, SessionState, Transition};
