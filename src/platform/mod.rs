//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the KL25Z and its simulated
//! stand-in. All address-space access is isolated here.

pub mod claims;
pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "kl25z")]
pub mod kl25z;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use claims::PeripheralClaims;
pub use error::{GpioError, PlatformError, Result, TimerError};
pub use traits::{DelayTimer, DigitalLine, Platform, RegisterInterface};
