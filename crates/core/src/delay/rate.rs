//! Tick/time conversion for a TPM counter clock.

use super::Divider;

/// Longest single session in counter ticks
///
/// A session of `cycles` ticks loads `MOD = cycles - 1`; the overflow flag
/// sets on the roll from `MOD` to 0, `cycles` ticks after the counter was
/// cleared.
pub const MAX_SESSION_TICKS: u32 = 0xFFFF;

const US_PER_SECOND: u64 = 1_000_000;

/// Counter tick rate: module input clock and the prescaler in front of it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickRate {
    /// TPM module input clock in Hz
    pub input_clock_hz: u32,
    /// Prescaler applied to the input clock
    pub divider: Divider,
}

impl TickRate {
    /// Create a tick rate
    pub const fn new(input_clock_hz: u32, divider: Divider) -> Self {
        Self {
            input_clock_hz,
            divider,
        }
    }

    /// Counter increments per second
    pub const fn tick_hz(&self) -> u32 {
        self.input_clock_hz / self.divider.factor()
    }

    /// Number of ticks covering at least `us` microseconds (rounded up)
    pub fn ticks_for_us(&self, us: u64) -> u64 {
        let numerator = us as u128 * self.input_clock_hz as u128;
        let denominator = self.divider.factor() as u128 * US_PER_SECOND as u128;
        numerator.div_ceil(denominator) as u64
    }

    /// Duration of `ticks` counter ticks in microseconds (rounded down)
    pub fn us_for_ticks(&self, ticks: u64) -> u64 {
        if self.input_clock_hz == 0 {
            return 0;
        }
        ticks * self.divider.factor() as u64 * US_PER_SECOND / self.input_clock_hz as u64
    }

    /// Longest delay a single session can express, in microseconds
    pub fn max_delay_us(&self) -> u64 {
        self.us_for_ticks(MAX_SESSION_TICKS as u64)
    }

    /// Input clocks consumed by a session started with `cycles`
    ///
    /// Zero runs the one-tick minimum.
    pub const fn input_clocks_for_cycles(&self, cycles: u16) -> u64 {
        let ticks = if cycles == 0 { 1 } else { cycles as u64 };
        ticks * self.divider.factor() as u64
    }
}

/// Session length in cycles for a delay of `ticks` ticks
///
/// Returns `None` when `ticks` exceeds [`MAX_SESSION_TICKS`]. A zero-tick
/// request maps to the shortest session the hardware can run (one tick).
pub fn cycles_for_ticks(ticks: u64) -> Option<u16> {
    if ticks <= MAX_SESSION_TICKS as u64 {
        Some(ticks as u16)
    } else {
        None
    }
}
