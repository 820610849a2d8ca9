//! Hardware register interface trait
//!
//! Drivers never dereference peripheral addresses themselves. They go through
//! this trait, which the real chip implements with volatile accesses and the
//! mock platform implements with a simulated register bank.

/// Access to 32-bit memory-mapped peripheral registers
///
/// Methods take `&self`: like the hardware, the register file is shared state
/// behind a handle, not something a driver borrows exclusively. Exclusive use of
/// a peripheral is enforced by the claim registry, not by this trait.
///
/// # Read-modify-write
///
/// [`modify`](Self::modify), [`set_bits`](Self::set_bits) and
/// [`clear_bits`](Self::clear_bits) write back whatever they read. On registers
/// holding write-one-to-clear flags the caller must mask those flags out of the
/// value it writes.
pub trait RegisterInterface {
    /// Read the register at `address`
    fn read(&self, address: u32) -> u32;

    /// Write `value` to the register at `address`
    fn write(&self, address: u32, value: u32);

    /// Read, transform and write back the register at `address`
    fn modify<F>(&self, address: u32, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let value = self.read(address);
        self.write(address, f(value));
    }

    /// Set the bits in `mask`
    fn set_bits(&self, address: u32, mask: u32) {
        self.modify(address, |v| v | mask);
    }

    /// Clear the bits in `mask`
    fn clear_bits(&self, address: u32, mask: u32) {
        self.modify(address, |v| v & !mask);
    }

    /// Replace the field selected by `mask` with `value << shift`
    fn write_field(&self, address: u32, mask: u32, shift: u32, value: u32) {
        self.modify(address, |v| (v & !mask) | ((value << shift) & mask));
    }
}

impl<T: RegisterInterface + ?Sized> RegisterInterface for &T {
    fn read(&self, address: u32) -> u32 {
        (**self).read(address)
    }

    fn write(&self, address: u32, value: u32) {
        (**self).write(address, value)
    }
}
