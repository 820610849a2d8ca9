//! GPIO port selection

use super::registers::{GPIOA_BASE, GPIO_STRIDE, HEADER_PINS, PCR_STRIDE, PORTA_PCR0, PORT_STRIDE};
use crate::devices::sim::ClockGate;
use crate::platform::error::GpioError;
use core::convert::TryFrom;

/// GPIO port (A..E)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
}

impl Port {
    /// Port number (0 = A .. 4 = E)
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// GPIO register block base address
    pub const fn gpio_base(self) -> u32 {
        GPIOA_BASE + GPIO_STRIDE * self.index() as u32
    }

    /// Pin control register address for `pin`
    pub const fn pcr_address(self, pin: u8) -> u32 {
        PORTA_PCR0 + PORT_STRIDE * self.index() as u32 + PCR_STRIDE * pin as u32
    }

    /// PORT module clock gate
    pub const fn clock_gate(self) -> ClockGate {
        ClockGate::Port(self.index())
    }

    /// Whether `pin` is routed to a board header
    pub const fn has_pin(self, pin: u8) -> bool {
        pin < 32 && HEADER_PINS[self.index() as usize] & (1 << pin) != 0
    }

    /// Port letter for log output
    pub const fn letter(self) -> char {
        match self {
            Port::A => 'A',
            Port::B => 'B',
            Port::C => 'C',
            Port::D => 'D',
            Port::E => 'E',
        }
    }
}

impl TryFrom<u8> for Port {
    type Error = GpioError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Port::A),
            1 => Ok(Port::B),
            2 => Ok(Port::C),
            3 => Ok(Port::D),
            4 => Ok(Port::E),
            _ => Err(GpioError::InvalidPort),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addresses() {
        assert_eq!(Port::A.gpio_base(), 0x400F_F000);
        assert_eq!(Port::B.gpio_base(), 0x400F_F040);
        assert_eq!(Port::E.gpio_base(), 0x400F_F100);
        assert_eq!(Port::A.pcr_address(1), 0x4004_9004);
        assert_eq!(Port::B.pcr_address(18), 0x4004_A048);
        assert_eq!(Port::D.clock_gate(), ClockGate::Port(3));
    }

    #[test]
    fn test_header_pins() {
        assert!(Port::B.has_pin(18));
        assert!(Port::B.has_pin(19));
        assert!(Port::D.has_pin(1));
        assert!(Port::A.has_pin(1));
        // PTA0 is SWD_CLK, not on a header
        assert!(!Port::A.has_pin(0));
        assert!(!Port::B.has_pin(4));
        assert!(!Port::C.has_pin(31));
        assert!(!Port::C.has_pin(40));
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Port::try_from(2), Ok(Port::C));
        assert_eq!(Port::try_from(5), Err(GpioError::InvalidPort));
    }
}
