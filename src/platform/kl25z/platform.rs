//! KL25Z Platform implementation

use super::Mmio;
use crate::devices::sim;
use crate::platform::{claims::PeripheralClaims, error::PlatformError, traits::Platform, Result};
use core::sync::atomic::{AtomicBool, Ordering};

static TAKEN: AtomicBool = AtomicBool::new(false);

/// KL25Z Platform implementation
///
/// Singleton owner of the peripheral address space. Thumbv6m has no atomic
/// read-modify-write, so the take flag is checked and set inside a critical
/// section.
#[derive(Debug)]
pub struct Kl25zPlatform {
    mmio: Mmio,
    claims: PeripheralClaims,
}

impl Kl25zPlatform {
    /// Take the platform, returning `Some` exactly once per program
    ///
    /// Disables the COP watchdog, which otherwise resets the chip about one
    /// second after reset.
    pub fn take() -> Option<Self> {
        let first = cortex_m::interrupt::free(|_| {
            if TAKEN.load(Ordering::Relaxed) {
                false
            } else {
                TAKEN.store(true, Ordering::Relaxed);
                true
            }
        });
        if !first {
            return None;
        }

        // SAFETY: guarded by TAKEN; this is the only handle created outside
        // of `registers()`
        let mmio = unsafe { Mmio::new() };
        sim::disable_watchdog(&mmio);
        crate::log_info!("KL25Z platform taken");
        Some(Self {
            mmio,
            claims: PeripheralClaims::new(),
        })
    }
}

impl Platform for Kl25zPlatform {
    type Registers = Mmio;

    fn init() -> Result<Self> {
        Self::take().ok_or(PlatformError::ResourceUnavailable)
    }

    fn registers(&self) -> Mmio {
        self.mmio
    }

    fn claims_mut(&mut self) -> &mut PeripheralClaims {
        &mut self.claims
    }
}
