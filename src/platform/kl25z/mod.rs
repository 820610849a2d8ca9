//! KL25Z platform implementation
//!
//! Real hardware access through volatile MMIO. Requires the `kl25z` feature.

mod mmio;
mod platform;

pub use mmio::Mmio;
pub use platform::Kl25zPlatform;
