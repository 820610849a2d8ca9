//! Mock Platform implementation for testing

use crate::platform::{claims::PeripheralClaims, traits::Platform, Result};

use super::SimulatedRegisters;

/// Mock Platform implementation
///
/// Hands out drivers bound to one [`SimulatedRegisters`] bank. Unlike the
/// chip platform, any number of mock platforms may exist at once.
///
/// # Example
///
/// ```
/// use kl25z_hal::platform::mock::MockPlatform;
/// use kl25z_hal::platform::traits::Platform;
/// use kl25z_hal::devices::tpm::TpmConfig;
/// use kl25z_hal::Divider;
///
/// let mut platform = MockPlatform::new();
/// platform.bank().set_auto_advance(16);
/// let mut tpm = platform.create_delay(0, TpmConfig::with_divider(Divider::Div16)).unwrap();
/// tpm.wait_delay(1000).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockPlatform {
    bank: SimulatedRegisters,
    claims: PeripheralClaims,
}

impl MockPlatform {
    /// Create a new mock platform over a fresh register bank
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock platform over an existing bank
    pub fn with_bank(bank: SimulatedRegisters) -> Self {
        Self {
            bank,
            claims: PeripheralClaims::new(),
        }
    }

    /// The simulated register bank, for driving time and inputs
    pub fn bank(&self) -> &SimulatedRegisters {
        &self.bank
    }

    /// Claim registry (read-only view)
    pub fn claims(&self) -> &PeripheralClaims {
        &self.claims
    }
}

impl Platform for MockPlatform {
    type Registers = SimulatedRegisters;

    fn init() -> Result<Self> {
        Ok(Self::new())
    }

    fn registers(&self) -> SimulatedRegisters {
        self.bank.clone()
    }

    fn claims_mut(&mut self) -> &mut PeripheralClaims {
        &mut self.claims
    }
}
