//! TPM prescaler divider

use core::convert::TryFrom;

/// Prescaler applied to the TPM counter clock
///
/// The discriminant is the `SC[PS]` field encoding; the counter advances once
/// every `1 << PS` input clocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Divider {
    /// Divide by 1
    Div1 = 0,
    /// Divide by 2
    Div2 = 1,
    /// Divide by 4
    Div4 = 2,
    /// Divide by 8
    Div8 = 3,
    /// Divide by 16
    Div16 = 4,
    /// Divide by 32
    Div32 = 5,
    /// Divide by 64
    Div64 = 6,
    /// Divide by 128
    Div128 = 7,
}

/// Rejected divider factor (not a power of two in `1..=128`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidDivider(pub u32);

impl Divider {
    /// All dividers, from fastest to slowest tick
    pub const ALL: [Divider; 8] = [
        Divider::Div1,
        Divider::Div2,
        Divider::Div4,
        Divider::Div8,
        Divider::Div16,
        Divider::Div32,
        Divider::Div64,
        Divider::Div128,
    ];

    /// Get the `SC[PS]` field value for this divider
    pub const fn register_value(self) -> u32 {
        self as u32
    }

    /// Get the division factor (1, 2, 4, ... 128)
    pub const fn factor(self) -> u32 {
        1 << (self as u32)
    }

    /// Decode a `SC[PS]` field value
    ///
    /// Only the low three bits are significant, matching the hardware field width.
    pub const fn from_register_value(value: u32) -> Self {
        Self::ALL[(value & 0x7) as usize]
    }
}

impl TryFrom<u32> for Divider {
    type Error = InvalidDivider;

    fn try_from(factor: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.factor() == factor)
            .ok_or(InvalidDivider(factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_encoding() {
        assert_eq!(Divider::Div1.register_value(), 0);
        assert_eq!(Divider::Div16.register_value(), 4);
        assert_eq!(Divider::Div128.register_value(), 7);
    }

    #[test]
    fn test_factor() {
        let factors: [u32; 8] = [1, 2, 4, 8, 16, 32, 64, 128];
        for (divider, factor) in Divider::ALL.iter().zip(factors.iter()) {
            assert_eq!(divider.factor(), *factor);
        }
    }

    #[test]
    fn test_try_from_factor() {
        assert_eq!(Divider::try_from(64), Ok(Divider::Div64));
        assert_eq!(Divider::try_from(3), Err(InvalidDivider(3)));
        assert_eq!(Divider::try_from(256), Err(InvalidDivider(256)));
        assert_eq!(Divider::try_from(0), Err(InvalidDivider(0)));
    }

    #[test]
    fn test_from_register_value_masks_field() {
        assert_eq!(Divider::from_register_value(7), Divider::Div128);
        assert_eq!(Divider::from_register_value(0x18 | 2), Divider::Div4);
    }
}
