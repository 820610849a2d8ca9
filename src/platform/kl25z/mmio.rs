//! Volatile memory-mapped register access

use crate::platform::traits::RegisterInterface;
use core::ptr;

/// Direct access to the KL25Z peripheral address space
///
/// Zero-sized; every driver holds its own copy.
#[derive(Debug, Clone, Copy)]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// Create a register access handle
    ///
    /// # Safety
    ///
    /// Only valid on a KL25Z, and only from code that respects the claim
    /// registry. [`Kl25zPlatform`](super::Kl25zPlatform) is the only caller.
    pub(crate) const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl RegisterInterface for Mmio {
    #[inline(always)]
    fn read(&self, address: u32) -> u32 {
        // SAFETY: addresses come from the register tables of this crate and
        // are aligned 32-bit peripheral registers
        unsafe { ptr::read_volatile(address as *const u32) }
    }

    #[inline(always)]
    fn write(&self, address: u32, value: u32) {
        // SAFETY: as for `read`
        unsafe { ptr::write_volatile(address as *mut u32, value) }
    }
}
