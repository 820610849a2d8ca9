//! Simulated KL25Z register bank
//!
//! Stores every register as a plain word and layers on the behaviour the
//! drivers depend on:
//!
//! - TPM: `CNT` clears on any write, `SC[TOF]` is write-one-to-clear, and the
//!   counter advances with simulated input clocks through the prescaler while
//!   `SC[CMOD] = 01`, its clock gate is open and a TPM clock source is selected.
//! - GPIO: `PSOR`/`PCOR`/`PTOR` act on `PDOR` and read as zero; `PDIR` reflects
//!   the driven level for outputs and the simulated input (or pull-up) for
//!   inputs.
//! - Accessing a TPM or PORT module with its clock gate closed panics, as the
//!   real bus would fault.
//!
//! Simulated time only moves through [`SimulatedRegisters::advance`] or, when
//! enabled, a fixed number of clocks per register read so that busy-wait loops
//! terminate.

use crate::devices::gpio::registers::{
    GPIOA_BASE, GPIO_STRIDE, PCOR, PCR_PE, PCR_PS, PCR_STRIDE, PDDR, PDIR, PDOR, PORTA_PCR0,
    PORT_STRIDE, PSOR, PTOR,
};
use crate::devices::sim::registers::{
    SCGC5_PORTA, SCGC6_TPM0, SIM_SCGC5, SIM_SCGC6, SIM_SOPT2, SOPT2_TPMSRC_MASK,
};
use crate::devices::tpm::registers::{
    CMOD_MODULE_CLOCK, CNT, COUNTER_MASK, MOD, SC, SC_CMOD_MASK, SC_CMOD_SHIFT, SC_PS_MASK,
    SC_TOF, TPM0_BASE, TPM_STRIDE,
};
use crate::platform::traits::RegisterInterface;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

const TPM_COUNT: u32 = 3;
const PORT_COUNT: u32 = 5;
const PINS_PER_PORT: u32 = 32;

#[derive(Debug, Default)]
struct Bank {
    cells: BTreeMap<u32, u32>,
    prescale_residue: [u64; TPM_COUNT as usize],
    elapsed_clocks: u64,
    clocks_per_read: u64,
    reads: u64,
    input_driven: [u32; PORT_COUNT as usize],
    input_level: [u32; PORT_COUNT as usize],
}

/// Simulated register bank
///
/// Cloning yields another handle onto the same bank, the way several drivers
/// share one physical register file.
#[derive(Debug, Clone, Default)]
pub struct SimulatedRegisters {
    bank: Rc<RefCell<Bank>>,
}

impl SimulatedRegisters {
    /// Create a bank with every register at zero and time stopped
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance simulated time by `clocks` TPM input clocks per register read
    pub fn set_auto_advance(&self, clocks: u32) {
        self.bank.borrow_mut().clocks_per_read = clocks as u64;
    }

    /// Advance simulated time by `clocks` TPM input clocks
    pub fn advance(&self, clocks: u64) {
        self.bank.borrow_mut().advance(clocks);
    }

    /// Input clocks elapsed since the bank was created
    pub fn elapsed_clocks(&self) -> u64 {
        self.bank.borrow().elapsed_clocks
    }

    /// Number of register reads performed through [`RegisterInterface`]
    pub fn read_count(&self) -> u64 {
        self.bank.borrow().reads
    }

    /// Read a register without side effects, gate checks or time advance
    pub fn peek(&self, address: u32) -> u32 {
        self.bank.borrow().value_at(address)
    }

    /// Store a raw register value, bypassing write semantics
    pub fn poke(&self, address: u32, value: u32) {
        self.bank.borrow_mut().cells.insert(address, value);
    }

    /// Drive an input pin externally (`None` releases it)
    pub fn drive_input(&self, port: u8, pin: u8, level: Option<bool>) {
        let mut bank = self.bank.borrow_mut();
        let (port, mask) = (port as usize, 1u32 << pin);
        match level {
            Some(high) => {
                bank.input_driven[port] |= mask;
                if high {
                    bank.input_level[port] |= mask;
                } else {
                    bank.input_level[port] &= !mask;
                }
            }
            None => bank.input_driven[port] &= !mask,
        }
    }
}

impl RegisterInterface for SimulatedRegisters {
    fn read(&self, address: u32) -> u32 {
        let mut bank = self.bank.borrow_mut();
        bank.check_gate(address);
        bank.reads += 1;
        let step = bank.clocks_per_read;
        if step > 0 {
            bank.advance(step);
        }
        bank.value_at(address)
    }

    fn write(&self, address: u32, value: u32) {
        let mut bank = self.bank.borrow_mut();
        bank.check_gate(address);
        bank.store(address, value);
    }
}

impl Bank {
    fn raw(&self, address: u32) -> u32 {
        self.cells.get(&address).copied().unwrap_or(0)
    }

    fn value_at(&self, address: u32) -> u32 {
        if let Some((port, offset)) = gpio_register(address) {
            let base = GPIOA_BASE + port * GPIO_STRIDE;
            return match offset {
                PSOR | PCOR | PTOR => 0,
                PDIR => self.pin_levels(port, base),
                _ => self.raw(address),
            };
        }
        self.raw(address)
    }

    fn pin_levels(&self, port: u32, base: u32) -> u32 {
        let outputs = self.raw(base + PDDR);
        let driven = self.input_driven[port as usize];
        let mut pulled_up = 0;
        for pin in 0..PINS_PER_PORT {
            let pcr = self.raw(PORTA_PCR0 + port * PORT_STRIDE + pin * PCR_STRIDE);
            if pcr & (PCR_PE | PCR_PS) == (PCR_PE | PCR_PS) {
                pulled_up |= 1 << pin;
            }
        }
        let inputs = (self.input_level[port as usize] & driven) | (pulled_up & !driven);
        (self.raw(base + PDOR) & outputs) | (inputs & !outputs)
    }

    fn store(&mut self, address: u32, value: u32) {
        if let Some((n, offset)) = tpm_register(address) {
            match offset {
                SC => {
                    let old = self.raw(address);
                    let tof = if value & SC_TOF != 0 { 0 } else { old & SC_TOF };
                    self.cells.insert(address, (value & !SC_TOF) | tof);
                }
                CNT => {
                    self.cells.insert(address, 0);
                    self.prescale_residue[n as usize] = 0;
                }
                MOD => {
                    self.cells.insert(address, value & COUNTER_MASK);
                }
                _ => {
                    self.cells.insert(address, value);
                }
            }
            return;
        }

        if let Some((port, offset)) = gpio_register(address) {
            let pdor = GPIOA_BASE + port * GPIO_STRIDE + PDOR;
            let current = self.raw(pdor);
            match offset {
                PSOR => self.cells.insert(pdor, current | value),
                PCOR => self.cells.insert(pdor, current & !value),
                PTOR => self.cells.insert(pdor, current ^ value),
                PDIR => None,
                _ => self.cells.insert(address, value),
            };
            return;
        }

        self.cells.insert(address, value);
    }

    fn advance(&mut self, clocks: u64) {
        self.elapsed_clocks += clocks;
        if self.raw(SIM_SOPT2) & SOPT2_TPMSRC_MASK == 0 {
            return;
        }
        for n in 0..TPM_COUNT {
            if self.raw(SIM_SCGC6) & (SCGC6_TPM0 << n) == 0 {
                continue;
            }
            let base = TPM0_BASE + n * TPM_STRIDE;
            let sc = self.raw(base + SC);
            if (sc & SC_CMOD_MASK) >> SC_CMOD_SHIFT != CMOD_MODULE_CLOCK {
                continue;
            }

            let shift = sc & SC_PS_MASK;
            let total = self.prescale_residue[n as usize] + clocks;
            let ticks = total >> shift;
            self.prescale_residue[n as usize] = total & ((1 << shift) - 1);
            if ticks == 0 {
                continue;
            }

            let count = self.raw(base + CNT) as u64;
            let modulo = self.raw(base + MOD) as u64;
            let period = modulo + 1;
            let to_overflow = if count <= modulo {
                modulo - count + 1
            } else {
                (COUNTER_MASK as u64 + 1 - count) + period
            };

            if ticks >= to_overflow {
                let count = (ticks - to_overflow) % period;
                self.cells.insert(base + CNT, count as u32);
                self.cells.insert(base + SC, sc | SC_TOF);
            } else {
                self.cells.insert(base + CNT, (count + ticks) as u32);
            }
        }
    }

    fn check_gate(&self, address: u32) {
        if let Some((n, _)) = tpm_register(address) {
            if self.raw(SIM_SCGC6) & (SCGC6_TPM0 << n) == 0 {
                panic!("bus fault: TPM{} accessed with its clock gate closed", n);
            }
        }
        if let Some(port) = pcr_port(address) {
            if self.raw(SIM_SCGC5) & (SCGC5_PORTA << port) == 0 {
                panic!("bus fault: PORT{} accessed with its clock gate closed", port);
            }
        }
    }
}

fn tpm_register(address: u32) -> Option<(u32, u32)> {
    let end = TPM0_BASE + TPM_COUNT * TPM_STRIDE;
    (TPM0_BASE..end)
        .contains(&address)
        .then(|| ((address - TPM0_BASE) / TPM_STRIDE, (address - TPM0_BASE) % TPM_STRIDE))
}

fn gpio_register(address: u32) -> Option<(u32, u32)> {
    let end = GPIOA_BASE + PORT_COUNT * GPIO_STRIDE;
    (GPIOA_BASE..end)
        .contains(&address)
        .then(|| ((address - GPIOA_BASE) / GPIO_STRIDE, (address - GPIOA_BASE) % GPIO_STRIDE))
}

fn pcr_port(address: u32) -> Option<u32> {
    let end = PORTA_PCR0 + PORT_COUNT * PORT_STRIDE;
    (PORTA_PCR0..end)
        .contains(&address)
        .then(|| (address - PORTA_PCR0) / PORT_STRIDE)
}
