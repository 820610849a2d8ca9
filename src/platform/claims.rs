//! Peripheral claim registry
//!
//! Each TPM instance and each pin may be handed to at most one driver. The
//! registry records claims for the life of the platform; there is no release,
//! matching the configure-once model of the clock gates.

use crate::platform::{PlatformError, Result};
use bitflags::bitflags;

bitflags! {
    /// Claimed TPM instances
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TpmClaims: u8 {
        const TPM0 = 0b001;
        const TPM1 = 0b010;
        const TPM2 = 0b100;
    }
}

/// Number of GPIO ports tracked
pub const PORT_COUNT: usize = 5;

/// Claim registry for one platform
#[derive(Debug, Clone, Default)]
pub struct PeripheralClaims {
    tpm: TpmClaims,
    pins: [u32; PORT_COUNT],
}

impl PeripheralClaims {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self {
            tpm: TpmClaims::empty(),
            pins: [0; PORT_COUNT],
        }
    }

    /// Claim TPM instance `index`
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if already claimed.
    pub fn claim_tpm(&mut self, index: u8) -> Result<()> {
        let flag = 1u8
            .checked_shl(index as u32)
            .and_then(TpmClaims::from_bits)
            .ok_or(PlatformError::ResourceUnavailable)?;
        if self.tpm.contains(flag) {
            crate::log_warn!("TPM{} already claimed", index);
            return Err(PlatformError::ResourceUnavailable);
        }
        self.tpm.insert(flag);
        Ok(())
    }

    /// Claim `pin` on `port`
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if already claimed or out of range.
    pub fn claim_pin(&mut self, port: u8, pin: u8) -> Result<()> {
        if port as usize >= PORT_COUNT || pin >= 32 {
            return Err(PlatformError::ResourceUnavailable);
        }
        let mask = 1u32 << pin;
        let claimed = &mut self.pins[port as usize];
        if *claimed & mask != 0 {
            crate::log_warn!("pin {}.{} already claimed", port, pin);
            return Err(PlatformError::ResourceUnavailable);
        }
        *claimed |= mask;
        Ok(())
    }

    /// Claimed TPM instances
    pub fn tpm(&self) -> TpmClaims {
        self.tpm
    }

    /// Whether `pin` on `port` is claimed
    pub fn pin_claimed(&self, port: u8, pin: u8) -> bool {
        self.pins
            .get(port as usize)
            .is_some_and(|mask| pin < 32 && mask & (1 << pin) != 0)
    }
}
