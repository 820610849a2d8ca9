//! Platform error types
//!
//! This module defines error types for platform operations.

use core::fmt;
use kl25z_hal_core::delay::InvalidDivider;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlatformError {
    /// Timer operation failed
    Timer(TimerError),
    /// GPIO operation failed
    Gpio(GpioError),
    /// Invalid configuration provided
    InvalidConfig,
    /// Resource already claimed or not present on this chip
    ResourceUnavailable,
}

/// Timer-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// Requested delay does not fit in one 16-bit counter session
    InvalidCycleCount,
    /// Unsupported TPM instance selector
    InvalidInstance,
    /// Delay requested before a prescaler divider was established
    NotConfigured,
    /// Divider change requested while a session is running
    SessionInFlight,
}

/// GPIO-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// Unsupported port selector
    InvalidPort,
    /// Pin not routed on this board
    InvalidPin,
}

impl From<TimerError> for PlatformError {
    fn from(e: TimerError) -> Self {
        PlatformError::Timer(e)
    }
}

impl From<GpioError> for PlatformError {
    fn from(e: GpioError) -> Self {
        PlatformError::Gpio(e)
    }
}

impl From<InvalidDivider> for PlatformError {
    fn from(_: InvalidDivider) -> Self {
        PlatformError::InvalidConfig
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Timer(e) => write!(f, "Timer error: {}", e),
            PlatformError::Gpio(e) => write!(f, "GPIO error: {}", e),
            PlatformError::InvalidConfig => write!(f, "Invalid configuration"),
            PlatformError::ResourceUnavailable => write!(f, "Resource not available"),
        }
    }
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerError::InvalidCycleCount => write!(f, "cycle count exceeds counter range"),
            TimerError::InvalidInstance => write!(f, "no such TPM instance"),
            TimerError::NotConfigured => write!(f, "prescaler divider not set"),
            TimerError::SessionInFlight => write!(f, "delay session in flight"),
        }
    }
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpioError::InvalidPort => write!(f, "no such GPIO port"),
            GpioError::InvalidPin => write!(f, "pin not available"),
        }
    }
}
