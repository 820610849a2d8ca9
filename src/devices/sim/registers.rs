//! SIM (System Integration Module) register definitions
//!
//! Only the clock gating and TPM clock source fields are used here.

// =============================================================================
// Addresses
// =============================================================================

/// System Options Register 2
pub const SIM_SOPT2: u32 = 0x4004_8004;

/// System Clock Gating Control Register 5 (PORT modules)
pub const SIM_SCGC5: u32 = 0x4004_8038;

/// System Clock Gating Control Register 6 (TPM modules)
pub const SIM_SCGC6: u32 = 0x4004_803C;

/// COP Control Register (watchdog, write-once after reset)
pub const SIM_COPC: u32 = 0x4004_8100;

// =============================================================================
// SIM_SOPT2 fields
// =============================================================================

/// TPM clock source select `[25:24]`
pub const SOPT2_TPMSRC_MASK: u32 = 0x0300_0000;
pub const SOPT2_TPMSRC_SHIFT: u32 = 24;

/// TPMSRC: clock disabled
pub const TPMSRC_DISABLED: u32 = 0b00;
/// TPMSRC: MCGFLLCLK, or MCGPLLCLK/2 when PLLFLLSEL is set
pub const TPMSRC_MCGFLL_PLL: u32 = 0b01;
/// TPMSRC: OSCERCLK
pub const TPMSRC_OSCER: u32 = 0b10;
/// TPMSRC: MCGIRCLK
pub const TPMSRC_MCGIR: u32 = 0b11;

/// PLL/FLL clock select
pub const SOPT2_PLLFLLSEL: u32 = 1 << 16;

// =============================================================================
// Gate bits
// =============================================================================

/// SCGC5 PORTA gate; PORTB..PORTE follow in consecutive bits
pub const SCGC5_PORTA: u32 = 1 << 9;

/// SCGC6 TPM0 gate; TPM1 and TPM2 follow in consecutive bits
pub const SCGC6_TPM0: u32 = 1 << 24;
