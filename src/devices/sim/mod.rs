//! System Integration Module: clock gating and TPM clock source
//!
//! Peripheral clocks on the KL25Z are gated off after reset, and a register
//! access to a gated module faults. Every driver activates its gate before
//! touching its own registers. Activation is idempotent and there is no
//! matching deactivation: gates stay on for the life of the program.

pub mod registers;

use crate::platform::traits::RegisterInterface;
use registers::*;

/// One peripheral clock gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockGate {
    /// PORT module clock (0 = PORTA .. 4 = PORTE)
    Port(u8),
    /// TPM module clock (0 = TPM0 .. 2 = TPM2)
    Tpm(u8),
}

impl ClockGate {
    /// Gating register holding this gate
    pub const fn register(self) -> u32 {
        match self {
            ClockGate::Port(_) => SIM_SCGC5,
            ClockGate::Tpm(_) => SIM_SCGC6,
        }
    }

    /// Bit mask of this gate within its register
    pub const fn mask(self) -> u32 {
        match self {
            ClockGate::Port(n) => SCGC5_PORTA << n,
            ClockGate::Tpm(n) => SCGC6_TPM0 << n,
        }
    }

    /// Whether the gate is currently open
    pub fn is_active<R: RegisterInterface>(self, regs: &R) -> bool {
        regs.read(self.register()) & self.mask() != 0
    }

    /// Open the gate
    ///
    /// Returns `true` if this call enabled the clock, `false` if it was already
    /// running. Calling it again is harmless.
    pub fn activate<R: RegisterInterface>(self, regs: &R) -> bool {
        if self.is_active(regs) {
            return false;
        }
        regs.set_bits(self.register(), self.mask());
        crate::log_debug!("SIM: clock gate {:?} enabled", self);
        true
    }
}

/// TPM counter clock source (shared by all TPM instances)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockSource {
    /// MCGFLLCLK (20.97 MHz after reset)
    #[default]
    McgFll,
    /// MCGPLLCLK divided by 2
    McgPllDiv2,
    /// OSCERCLK (external reference)
    Oscer,
    /// MCGIRCLK (internal reference)
    McgIr,
}

impl ClockSource {
    /// SOPT2[TPMSRC] encoding
    pub const fn tpmsrc(self) -> u32 {
        match self {
            ClockSource::McgFll | ClockSource::McgPllDiv2 => TPMSRC_MCGFLL_PLL,
            ClockSource::Oscer => TPMSRC_OSCER,
            ClockSource::McgIr => TPMSRC_MCGIR,
        }
    }
}

/// Route `source` to the TPM modules
///
/// PLLFLLSEL is shared with UART0 and USB; it is only written for the two
/// MCG sources that depend on it.
pub fn select_tpm_clock<R: RegisterInterface>(regs: &R, source: ClockSource) {
    regs.write_field(SIM_SOPT2, SOPT2_TPMSRC_MASK, SOPT2_TPMSRC_SHIFT, source.tpmsrc());
    match source {
        ClockSource::McgFll => regs.clear_bits(SIM_SOPT2, SOPT2_PLLFLLSEL),
        ClockSource::McgPllDiv2 => regs.set_bits(SIM_SOPT2, SOPT2_PLLFLLSEL),
        ClockSource::Oscer | ClockSource::McgIr => {}
    }
}

/// Whether any clock is routed to the TPM modules
pub fn tpm_clock_selected<R: RegisterInterface>(regs: &R) -> bool {
    (regs.read(SIM_SOPT2) & SOPT2_TPMSRC_MASK) >> SOPT2_TPMSRC_SHIFT != TPMSRC_DISABLED
}

/// Disable the COP watchdog
///
/// COPC is write-once after reset; the watchdog is enabled out of reset with a
/// ~1 s timeout, so long-running polling loops must call this early.
pub fn disable_watchdog<R: RegisterInterface>(regs: &R) {
    regs.write(SIM_COPC, 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::SimulatedRegisters;

    #[test]
    fn test_gate_masks() {
        assert_eq!(ClockGate::Port(0).mask(), 1 << 9);
        assert_eq!(ClockGate::Port(4).mask(), 1 << 13);
        assert_eq!(ClockGate::Tpm(0).mask(), 1 << 24);
        assert_eq!(ClockGate::Tpm(2).mask(), 1 << 26);
        assert_eq!(ClockGate::Tpm(1).register(), SIM_SCGC6);
        assert_eq!(ClockGate::Port(1).register(), SIM_SCGC5);
    }

    #[test]
    fn test_activate_is_idempotent() {
        let regs = SimulatedRegisters::new();
        assert!(!ClockGate::Tpm(2).is_active(&regs));

        assert!(ClockGate::Tpm(2).activate(&regs));
        assert!(!ClockGate::Tpm(2).activate(&regs));
        assert_eq!(regs.peek(SIM_SCGC6), 1 << 26);

        // Other gates in the same register are untouched
        assert!(ClockGate::Tpm(0).activate(&regs));
        assert_eq!(regs.peek(SIM_SCGC6), (1 << 26) | (1 << 24));
    }

    #[test]
    fn test_select_tpm_clock() {
        let regs = SimulatedRegisters::new();
        assert!(!tpm_clock_selected(&regs));

        select_tpm_clock(&regs, ClockSource::McgPllDiv2);
        assert_eq!(regs.peek(SIM_SOPT2), (0b01 << 24) | SOPT2_PLLFLLSEL);

        select_tpm_clock(&regs, ClockSource::McgFll);
        assert_eq!(regs.peek(SIM_SOPT2), 0b01 << 24);
        assert!(tpm_clock_selected(&regs));

        select_tpm_clock(&regs, ClockSource::McgIr);
        assert_eq!(regs.peek(SIM_SOPT2), 0b11 << 24);
    }
}
