//! TPM delay configuration

use super::registers::{TPM0_BASE, TPM_STRIDE};
use crate::devices::sim::{ClockGate, ClockSource};
use crate::platform::error::TimerError;
use core::convert::TryFrom;
use kl25z_hal_core::delay::Divider;

/// Default TPM input clock in Hz (from build-time environment variable)
///
/// `build.rs` forwards `KL25Z_TPM_CLOCK_HZ`, falling back to the FLL output
/// after reset.
pub const DEFAULT_INPUT_CLOCK_HZ: u32 = {
    const S: &str = env!("KL25Z_TPM_CLOCK_HZ");
    const_parse_u32(S)
};

/// Parse a decimal u32 at compile time
///
/// Returns 0 on any non-digit; overflow wraps. `build.rs` validates the input.
const fn const_parse_u32(s: &str) -> u32 {
    let bytes = s.as_bytes();
    let mut value: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] < b'0' || bytes[i] > b'9' {
            return 0;
        }
        value = value.wrapping_mul(10).wrapping_add((bytes[i] - b'0') as u32);
        i += 1;
    }
    value
}

/// TPM instance selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TpmInstance {
    Tpm0,
    Tpm1,
    Tpm2,
}

impl TpmInstance {
    /// Instance number (0..=2)
    pub const fn index(self) -> u8 {
        match self {
            TpmInstance::Tpm0 => 0,
            TpmInstance::Tpm1 => 1,
            TpmInstance::Tpm2 => 2,
        }
    }

    /// Register block base address
    pub const fn base_address(self) -> u32 {
        TPM0_BASE + TPM_STRIDE * self.index() as u32
    }

    /// Module clock gate
    pub const fn clock_gate(self) -> ClockGate {
        ClockGate::Tpm(self.index())
    }
}

impl TryFrom<u8> for TpmInstance {
    type Error = TimerError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(TpmInstance::Tpm0),
            1 => Ok(TpmInstance::Tpm1),
            2 => Ok(TpmInstance::Tpm2),
            _ => Err(TimerError::InvalidInstance),
        }
    }
}

/// Counter behaviour while the core is halted by a debugger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebugMode {
    /// Counter pauses (reset state)
    #[default]
    Paused,
    /// Counter keeps running
    Running,
}

impl DebugMode {
    /// CONF[DBGMODE] encoding
    pub const fn register_value(self) -> u32 {
        match self {
            DebugMode::Paused => 0b00,
            DebugMode::Running => 0b11,
        }
    }
}

/// TPM delay configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TpmConfig {
    /// Prescaler applied at construction; `None` leaves it to `set_frequency`
    pub divider: Option<Divider>,
    /// Counter clock source routed through SIM_SOPT2
    pub clock_source: ClockSource,
    /// Frequency of the selected clock source in Hz
    pub input_clock_hz: u32,
    /// Counter behaviour in debug halt
    pub debug_mode: DebugMode,
}

impl Default for TpmConfig {
    fn default() -> Self {
        Self {
            divider: None,
            clock_source: ClockSource::McgFll,
            input_clock_hz: DEFAULT_INPUT_CLOCK_HZ,
            debug_mode: DebugMode::Paused,
        }
    }
}

impl TpmConfig {
    /// Default configuration with `divider` applied at construction
    pub fn with_divider(divider: Divider) -> Self {
        Self {
            divider: Some(divider),
            ..Self::default()
        }
    }
}
