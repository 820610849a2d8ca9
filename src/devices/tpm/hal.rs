//! embedded-hal 0.2 adapters for [`TpmDelay`]
//!
//! The blocking delay traits cannot report errors; a driver without a divider
//! logs the failure and returns immediately.

use super::TpmDelay;
use crate::platform::traits::{DelayTimer, RegisterInterface};
use crate::platform::Result;
use embedded_hal::blocking::delay::{DelayMs, DelayUs};
use embedded_hal::timer::{Cancel, CountDown};
use kl25z_hal_core::delay::{DelayStatus, Divider, TickRate};
use void::Void;

impl<R: RegisterInterface> DelayUs<u32> for TpmDelay<R> {
    fn delay_us(&mut self, us: u32) {
        if let Err(e) = TpmDelay::delay_us(self, us) {
            crate::log_error!("TPM{}: delay_us failed: {}", self.instance().index(), e);
        }
    }
}

impl<R: RegisterInterface> DelayUs<u16> for TpmDelay<R> {
    fn delay_us(&mut self, us: u16) {
        DelayUs::<u32>::delay_us(self, us as u32);
    }
}

impl<R: RegisterInterface> DelayUs<u8> for TpmDelay<R> {
    fn delay_us(&mut self, us: u8) {
        DelayUs::<u32>::delay_us(self, us as u32);
    }
}

impl<R: RegisterInterface> DelayMs<u32> for TpmDelay<R> {
    fn delay_ms(&mut self, ms: u32) {
        if let Err(e) = TpmDelay::delay_ms(self, ms) {
            crate::log_error!("TPM{}: delay_ms failed: {}", self.instance().index(), e);
        }
    }
}

impl<R: RegisterInterface> DelayMs<u16> for TpmDelay<R> {
    fn delay_ms(&mut self, ms: u16) {
        DelayMs::<u32>::delay_ms(self, ms as u32);
    }
}

impl<R: RegisterInterface> DelayMs<u8> for TpmDelay<R> {
    fn delay_ms(&mut self, ms: u8) {
        DelayMs::<u32>::delay_ms(self, ms as u32);
    }
}

/// One-shot countdown of `count` ticks
///
/// `wait()` returns `Ok` once the session has expired, and keeps returning
/// `Ok` until the next `start()`.
impl<R: RegisterInterface> CountDown for TpmDelay<R> {
    type Time = u16;

    fn start<T>(&mut self, count: T)
    where
        T: Into<u16>,
    {
        if let Err(e) = TpmDelay::start_delay(self, count.into()) {
            crate::log_error!("TPM{}: countdown not started: {}", self.instance().index(), e);
        }
    }

    fn wait(&mut self) -> nb::Result<(), Void> {
        match TpmDelay::timeout_delay(self) {
            DelayStatus::Running => Err(nb::Error::WouldBlock),
            DelayStatus::Expired | DelayStatus::Idle => Ok(()),
        }
    }
}

impl<R: RegisterInterface> Cancel for TpmDelay<R> {
    type Error = Void;

    fn cancel(&mut self) -> core::result::Result<(), Void> {
        TpmDelay::cancel_delay(self);
        Ok(())
    }
}

impl<R: RegisterInterface> DelayTimer for TpmDelay<R> {
    fn set_frequency(&mut self, divider: Divider) -> Result<()> {
        TpmDelay::set_frequency(self, divider)
    }

    fn start_delay(&mut self, cycles: u16) -> Result<()> {
        TpmDelay::start_delay(self, cycles)
    }

    fn timeout_delay(&mut self) -> DelayStatus {
        TpmDelay::timeout_delay(self)
    }

    fn wait_delay(&mut self, cycles: u16) -> Result<()> {
        TpmDelay::wait_delay(self, cycles)
    }

    fn counter(&self) -> u16 {
        TpmDelay::counter(self)
    }

    fn cancel_delay(&mut self) {
        TpmDelay::cancel_delay(self)
    }

    fn tick_rate(&self) -> Option<TickRate> {
        TpmDelay::tick_rate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::tpm::{TpmConfig, TpmInstance};
    use crate::platform::mock::SimulatedRegisters;

    fn tpm1(regs: &SimulatedRegisters, divider: Option<Divider>) -> TpmDelay<SimulatedRegisters> {
        let config = TpmConfig {
            divider,
            input_clock_hz: 8_000_000,
            ..TpmConfig::default()
        };
        TpmDelay::new(regs.clone(), TpmInstance::Tpm1, config)
    }

    #[test]
    fn test_delay_us_trait() {
        let regs = SimulatedRegisters::new();
        let mut tpm = tpm1(&regs, Some(Divider::Div8));
        regs.set_auto_advance(2);

        let start = regs.elapsed_clocks();
        DelayUs::<u16>::delay_us(&mut tpm, 500);
        // 1 MHz tick rate
        assert!(regs.elapsed_clocks() - start >= 500 * 8);
    }

    #[test]
    fn test_delay_ms_trait() {
        let regs = SimulatedRegisters::new();
        let mut tpm = tpm1(&regs, Some(Divider::Div128));
        regs.set_auto_advance(64);

        let start = regs.elapsed_clocks();
        DelayMs::<u8>::delay_ms(&mut tpm, 3);
        assert!(regs.elapsed_clocks() - start >= 24_000);
    }

    #[test]
    fn test_delay_without_divider_returns() {
        let regs = SimulatedRegisters::new();
        let mut tpm = tpm1(&regs, None);
        regs.set_auto_advance(1);
        DelayMs::<u32>::delay_ms(&mut tpm, 1_000);
        assert_eq!(regs.elapsed_clocks(), 0);
    }

    #[test]
    fn test_countdown_wait() {
        let regs = SimulatedRegisters::new();
        let mut tpm = tpm1(&regs, Some(Divider::Div1));

        tpm.start(9u16);
        assert!(matches!(tpm.wait(), Err(nb::Error::WouldBlock)));

        regs.advance(8);
        assert!(matches!(tpm.wait(), Err(nb::Error::WouldBlock)));
        regs.advance(1);
        assert!(tpm.wait().is_ok());
        assert!(tpm.wait().is_ok());
    }

    #[test]
    fn test_countdown_block() {
        let regs = SimulatedRegisters::new();
        let mut tpm = tpm1(&regs, Some(Divider::Div4));
        regs.set_auto_advance(3);

        tpm.start(99u8);
        let start = regs.elapsed_clocks();
        assert!(nb::block!(tpm.wait()).is_ok());
        assert!(regs.elapsed_clocks() - start >= 99 * 4 - 3);
    }

    #[test]
    fn test_cancel_trait() {
        let regs = SimulatedRegisters::new();
        let mut tpm = tpm1(&regs, Some(Divider::Div1));
        tpm.start(1000u16);
        assert!(Cancel::cancel(&mut tpm).is_ok());
        regs.advance(5_000);
        assert_eq!(DelayTimer::timeout_delay(&mut tpm), DelayStatus::Idle);
    }

    fn run_through_trait<T: DelayTimer>(timer: &mut T) -> DelayStatus {
        timer.start_delay(4).unwrap();
        timer.timeout_delay()
    }

    #[test]
    fn test_delay_timer_trait_object() {
        let regs = SimulatedRegisters::new();
        let mut tpm = tpm1(&regs, None);
        assert!(DelayTimer::tick_rate(&tpm).is_none());

        DelayTimer::set_frequency(&mut tpm, Divider::Div2).unwrap();
        assert_eq!(run_through_trait(&mut tpm), DelayStatus::Running);
        // Four ticks of two clocks roll the counter back to zero
        regs.advance(8);
        assert_eq!(DelayTimer::counter(&tpm), 0);
        assert_eq!(DelayTimer::timeout_delay(&mut tpm), DelayStatus::Expired);
    }
}
