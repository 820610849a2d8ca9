//! TPM delay driver implementation
//!
//! Runs one TPM instance as an up-counting free-running counter and uses the
//! overflow flag as the delay completion signal. A session with `cycles` loads
//! `MOD = cycles - 1` and clears `CNT`; `TOF` sets when the counter rolls from
//! `MOD` to zero, `cycles` ticks after the start. Zero runs a single tick.
//!
//! This driver is platform-agnostic and works with any [`RegisterInterface`].

use super::config::{DebugMode, TpmConfig, TpmInstance};
use super::registers::*;
use crate::devices::sim;
use crate::platform::{error::TimerError, traits::RegisterInterface, Result};
use core::hint::spin_loop;
use kl25z_hal_core::delay::{
    cycles_for_ticks, step, DelayStatus, Divider, SessionState, TickRate, MAX_SESSION_TICKS,
};

const US_PER_MS: u64 = 1_000;

/// TPM delay driver
///
/// Owns one TPM instance for the life of the program. Not `Clone`: a second
/// driver on the same instance would silently reprogram the first.
///
/// # Type Parameters
///
/// * `R` - Register access, volatile MMIO on hardware or a simulated bank in tests
#[derive(Debug)]
pub struct TpmDelay<R: RegisterInterface> {
    /// Register access handle
    regs: R,

    /// Bound instance
    instance: TpmInstance,

    /// Instance base address
    base: u32,

    /// Prescaler currently programmed into SC[PS]
    divider: Option<Divider>,

    /// Input clock frequency used for time conversion
    input_clock_hz: u32,

    /// Software session state
    state: SessionState,
}

impl<R: RegisterInterface> TpmDelay<R> {
    /// Bind a driver to `instance`
    ///
    /// Opens the instance clock gate, routes the configured clock source to the
    /// TPM modules and leaves the counter disabled with `MOD = 0xFFFF`. The
    /// clock gate is never closed again.
    ///
    /// # Arguments
    ///
    /// * `regs` - Register access handle
    /// * `instance` - TPM instance to own
    /// * `config` - Clock and prescaler configuration
    pub fn new(regs: R, instance: TpmInstance, config: TpmConfig) -> Self {
        instance.clock_gate().activate(&regs);
        sim::select_tpm_clock(&regs, config.clock_source);

        let mut tpm = Self {
            regs,
            instance,
            base: instance.base_address(),
            divider: None,
            input_clock_hz: config.input_clock_hz,
            state: SessionState::Idle,
        };
        tpm.enter_base_mode(config.debug_mode);

        if let Some(divider) = config.divider {
            tpm.write_prescaler(divider);
            tpm.divider = Some(divider);
        }

        crate::log_info!(
            "TPM{}: delay mode, clock {:?} @ {} Hz, divider {:?}",
            instance.index(),
            config.clock_source,
            config.input_clock_hz,
            config.divider
        );
        tpm
    }

    /// Bound instance
    pub fn instance(&self) -> TpmInstance {
        self.instance
    }

    /// Currently programmed divider
    pub fn divider(&self) -> Option<Divider> {
        self.divider
    }

    /// Software session state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current tick rate, if a divider has been set
    pub fn tick_rate(&self) -> Option<TickRate> {
        self.divider
            .map(|divider| TickRate::new(self.input_clock_hz, divider))
    }

    /// Set the prescaler divider
    ///
    /// The divider can only change between sessions; SC[PS] is written with
    /// the counter disabled.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::SessionInFlight` while a session is running.
    pub fn set_frequency(&mut self, divider: Divider) -> Result<()> {
        if self.state == SessionState::Running {
            crate::log_warn!(
                "TPM{}: divider change to {:?} rejected, session running",
                self.instance.index(),
                divider
            );
            return Err(TimerError::SessionInFlight.into());
        }

        self.stop_counter();
        self.write_prescaler(divider);
        self.divider = Some(divider);
        crate::log_debug!("TPM{}: divider {:?}", self.instance.index(), divider);
        Ok(())
    }

    /// Start a non-blocking session of `cycles` ticks
    ///
    /// `0` and `1` both run the one-tick minimum.
    /// Any session already in flight is discarded, including an unobserved
    /// expiry.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::NotConfigured` if no divider has been set.
    pub fn start_delay(&mut self, cycles: u16) -> Result<()> {
        if self.divider.is_none() {
            crate::log_error!("TPM{}: delay started without divider", self.instance.index());
            return Err(TimerError::NotConfigured.into());
        }

        // MOD is buffered while the counter runs, so load it stopped
        self.stop_counter();
        self.regs.write(self.reg(CNT), 0);
        self.regs.write(self.reg(MOD), cycles.saturating_sub(1) as u32);
        self.clear_overflow();
        self.set_clock_mode(CMOD_MODULE_CLOCK);

        self.state = SessionState::Running;
        crate::log_trace!("TPM{}: start {} cycles", self.instance.index(), cycles);
        Ok(())
    }

    /// Poll the current session
    ///
    /// The overflow flag is only sampled while a session is running. On the
    /// poll that observes it, the counter is stopped, the flag is cleared and
    /// `Expired` is returned; later polls return `Idle`.
    pub fn timeout_delay(&mut self) -> DelayStatus {
        let pending = self.state.samples_overflow() && self.regs.read(self.reg(SC)) & SC_TOF != 0;
        let transition = step(self.state, pending);

        if transition.stop_counter {
            self.stop_counter();
        }
        if transition.clear_overflow {
            self.clear_overflow();
        }
        if transition.status == DelayStatus::Expired {
            crate::log_trace!("TPM{}: expired", self.instance.index());
        }

        self.state = transition.next;
        transition.status
    }

    /// Start a session and spin until it expires
    ///
    /// # Errors
    ///
    /// Returns `TimerError::NotConfigured` if no divider has been set.
    pub fn wait_delay(&mut self, cycles: u16) -> Result<()> {
        self.start_delay(cycles)?;
        while self.timeout_delay() == DelayStatus::Running {
            spin_loop();
        }
        Ok(())
    }

    /// Current raw counter value
    pub fn counter(&self) -> u16 {
        (self.regs.read(self.reg(CNT)) & COUNTER_MASK) as u16
    }

    /// Stop the counter and drop any pending expiry
    ///
    /// Idempotent: with no session in flight the registers already hold the
    /// values written here.
    pub fn cancel_delay(&mut self) {
        self.stop_counter();
        self.clear_overflow();
        if self.state == SessionState::Running {
            crate::log_trace!("TPM{}: cancelled", self.instance.index());
        }
        self.state = SessionState::Idle;
    }

    /// Start a non-blocking session covering at least `us` microseconds
    ///
    /// # Errors
    ///
    /// Returns `TimerError::NotConfigured` if no divider has been set, or
    /// `TimerError::InvalidCycleCount` if the duration needs more than
    /// 0xFFFF ticks at the current divider.
    pub fn start_delay_us(&mut self, us: u32) -> Result<()> {
        let rate = self.tick_rate().ok_or(TimerError::NotConfigured)?;
        let cycles =
            cycles_for_ticks(rate.ticks_for_us(us as u64)).ok_or(TimerError::InvalidCycleCount)?;
        self.start_delay(cycles)
    }

    /// Block for at least `us` microseconds
    ///
    /// Durations longer than one session run as consecutive sessions.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::NotConfigured` if no divider has been set.
    pub fn delay_us(&mut self, us: u32) -> Result<()> {
        self.block_for_us(us as u64)
    }

    /// Block for at least `ms` milliseconds
    ///
    /// # Errors
    ///
    /// Returns `TimerError::NotConfigured` if no divider has been set.
    pub fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.block_for_us(ms as u64 * US_PER_MS)
    }

    fn block_for_us(&mut self, us: u64) -> Result<()> {
        let rate = self.tick_rate().ok_or(TimerError::NotConfigured)?;
        let mut remaining = rate.ticks_for_us(us);
        while remaining > 0 {
            let chunk = remaining.min(MAX_SESSION_TICKS as u64);
            self.wait_delay(chunk as u16)?;
            remaining -= chunk;
        }
        Ok(())
    }

    fn reg(&self, offset: u32) -> u32 {
        self.base + offset
    }

    /// Counter disabled, up-counting, no interrupt, flags and counter cleared
    fn enter_base_mode(&mut self, debug_mode: DebugMode) {
        self.regs.write(self.reg(SC), SC_TOF);
        self.wait_counter_stopped();
        self.regs.write_field(
            self.reg(CONF),
            CONF_DBGMODE_MASK,
            CONF_DBGMODE_SHIFT,
            debug_mode.register_value(),
        );
        self.regs.write(self.reg(CNT), 0);
        self.regs.write(self.reg(MOD), COUNTER_MASK);
    }

    /// Read-modify-write SC with TOF masked out of the written value
    ///
    /// TOF is write-one-to-clear; writing back a set flag would drop an
    /// expiry nobody has observed.
    fn modify_sc<F>(&self, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        self.regs.modify(self.reg(SC), |v| f(v & !SC_TOF));
    }

    fn write_prescaler(&self, divider: Divider) {
        self.modify_sc(|v| (v & !SC_PS_MASK) | (divider.register_value() << SC_PS_SHIFT));
    }

    fn clear_overflow(&self) {
        self.modify_sc(|v| v | SC_TOF);
    }

    fn set_clock_mode(&self, mode: u32) {
        self.modify_sc(|v| (v & !SC_CMOD_MASK) | (mode << SC_CMOD_SHIFT));
    }

    fn stop_counter(&self) {
        self.set_clock_mode(CMOD_DISABLED);
        self.wait_counter_stopped();
    }

    /// CMOD writes are acknowledged only after synchronising to the counter clock
    fn wait_counter_stopped(&self) {
        while (self.regs.read(self.reg(SC)) & SC_CMOD_MASK) >> SC_CMOD_SHIFT != CMOD_DISABLED {
            spin_loop();
        }
    }
}
