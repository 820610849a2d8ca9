//! Delay timer interface trait
//!
//! This module defines the cycle-based delay interface a timer/counter driver provides.

use crate::platform::Result;
use kl25z_hal_core::delay::{DelayStatus, Divider, TickRate};

/// Delay timer interface trait
///
/// One implementor owns one timer/counter instance and runs at most one delay
/// session at a time. Cycle counts are in counter ticks at the configured
/// divider.
///
/// # Safety Invariants
///
/// - Only one owner per timer instance
/// - No concurrent access from interrupt context; completion is polled
pub trait DelayTimer {
    /// Set the prescaler divider
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer(TimerError::SessionInFlight)` while a
    /// session is running.
    fn set_frequency(&mut self, divider: Divider) -> Result<()>;

    /// Start a non-blocking session expiring after `cycles` ticks (at least one)
    ///
    /// Any session already in flight is discarded.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer(TimerError::NotConfigured)` if no divider
    /// has been set.
    fn start_delay(&mut self, cycles: u16) -> Result<()>;

    /// Poll the current session
    ///
    /// Reports [`DelayStatus::Expired`] once per session, then
    /// [`DelayStatus::Idle`] until the next start.
    fn timeout_delay(&mut self) -> DelayStatus;

    /// Start a session and block until it expires
    ///
    /// # Errors
    ///
    /// Same as [`start_delay`](Self::start_delay).
    fn wait_delay(&mut self, cycles: u16) -> Result<()>;

    /// Current raw counter value
    fn counter(&self) -> u16;

    /// Stop the counter and drop any pending expiry
    ///
    /// Calling this with no session in flight has no effect.
    fn cancel_delay(&mut self);

    /// Current tick rate, if a divider has been set
    fn tick_rate(&self) -> Option<TickRate>;
}
