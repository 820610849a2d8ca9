//! Root platform trait
//!
//! This module defines the root Platform trait that hands out peripheral drivers.

use super::RegisterInterface;
use crate::devices::gpio::{GpioLine, Port};
use crate::devices::tpm::{TpmConfig, TpmDelay, TpmInstance};
use crate::platform::{claims::PeripheralClaims, error::GpioError, Result};
use core::convert::TryFrom;

/// Root platform trait
///
/// A platform owns the register file and the claim registry. Every driver it
/// creates gets its own handle onto the register file and a recorded claim on
/// its peripheral, so no TPM instance or pin is handed out twice.
///
/// # Example
///
/// ```ignore
/// let mut platform = Kl25zPlatform::init()?;
/// let mut tpm = platform.create_delay(2, TpmConfig::with_divider(Divider::Div128))?;
/// let mut led = platform.create_line(1, 18)?;
/// ```
pub trait Platform: Sized {
    /// Register access handle passed to drivers
    type Registers: RegisterInterface + Clone;

    /// Initialize the platform
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if the platform has
    /// already been taken.
    fn init() -> Result<Self>;

    /// A new handle onto the register file
    fn registers(&self) -> Self::Registers;

    /// Claim registry
    fn claims_mut(&mut self) -> &mut PeripheralClaims;

    /// Create a delay driver on TPM instance `tpm_id`
    ///
    /// # Arguments
    ///
    /// * `tpm_id` - TPM instance number (0..=2)
    /// * `config` - Clock and prescaler configuration
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidInstance` for an unknown instance, or
    /// `PlatformError::ResourceUnavailable` if it is already claimed.
    fn create_delay(&mut self, tpm_id: u8, config: TpmConfig) -> Result<TpmDelay<Self::Registers>> {
        let instance = TpmInstance::try_from(tpm_id)?;
        self.claims_mut().claim_tpm(instance.index())?;
        Ok(TpmDelay::new(self.registers(), instance, config))
    }

    /// Create a GPIO line driver
    ///
    /// # Arguments
    ///
    /// * `port_id` - Port number (0 = A .. 4 = E)
    /// * `pin` - Pin number within the port
    ///
    /// # Errors
    ///
    /// Returns `GpioError::InvalidPort` or `GpioError::InvalidPin` for a pin
    /// not on the board headers, or `PlatformError::ResourceUnavailable` if
    /// the pin is already claimed.
    fn create_line(&mut self, port_id: u8, pin: u8) -> Result<GpioLine<Self::Registers>> {
        let port = Port::try_from(port_id)?;
        if !port.has_pin(pin) {
            return Err(GpioError::InvalidPin.into());
        }
        self.claims_mut().claim_pin(port.index(), pin)?;
        GpioLine::new(self.registers(), port, pin)
    }
}
