//! TPM (Timer/PWM Module) register definitions
//!
//! Offsets are relative to the instance base address. All instances share one
//! layout; only the counter, modulo, status/control and configuration
//! registers are used in delay mode.

// =============================================================================
// Base addresses
// =============================================================================

/// TPM0 base address; TPM1 and TPM2 follow at 0x1000 strides
pub const TPM0_BASE: u32 = 0x4003_8000;

/// Distance between consecutive TPM instances
pub const TPM_STRIDE: u32 = 0x1000;

// =============================================================================
// Register offsets
// =============================================================================

/// Status and Control
pub const SC: u32 = 0x00;

/// Counter (any write clears it)
pub const CNT: u32 = 0x04;

/// Modulo
pub const MOD: u32 = 0x08;

/// Configuration
pub const CONF: u32 = 0x84;

// =============================================================================
// SC fields
// =============================================================================

/// Prescale factor selection `[2:0]`
pub const SC_PS_MASK: u32 = 0x07;
pub const SC_PS_SHIFT: u32 = 0;

/// Clock mode selection `[4:3]`
pub const SC_CMOD_MASK: u32 = 0x18;
pub const SC_CMOD_SHIFT: u32 = 3;

/// CMOD: counter disabled
pub const CMOD_DISABLED: u32 = 0b00;
/// CMOD: counter increments on every module clock
pub const CMOD_MODULE_CLOCK: u32 = 0b01;

/// Timer overflow flag (write 1 to clear)
pub const SC_TOF: u32 = 1 << 7;

// =============================================================================
// CONF fields
// =============================================================================

/// Debug mode `[7:6]`
pub const CONF_DBGMODE_MASK: u32 = 0xC0;
pub const CONF_DBGMODE_SHIFT: u32 = 6;

// =============================================================================
// Counter
// =============================================================================

/// Counter and modulo width
pub const COUNTER_MASK: u32 = 0xFFFF;
