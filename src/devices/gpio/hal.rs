//! embedded-hal 0.2 digital pin adapters for [`GpioLine`]

use super::GpioLine;
use crate::platform::{traits::RegisterInterface, PlatformError};
use embedded_hal::digital::v2::{InputPin, OutputPin, StatefulOutputPin, ToggleableOutputPin};

impl<R: RegisterInterface> OutputPin for GpioLine<R> {
    type Error = PlatformError;

    fn set_high(&mut self) -> Result<(), PlatformError> {
        self.write_bit(true)
    }

    fn set_low(&mut self) -> Result<(), PlatformError> {
        self.write_bit(false)
    }
}

impl<R: RegisterInterface> StatefulOutputPin for GpioLine<R> {
    fn is_set_high(&self) -> Result<bool, PlatformError> {
        Ok(self.output_latch())
    }

    fn is_set_low(&self) -> Result<bool, PlatformError> {
        Ok(!self.output_latch())
    }
}

impl<R: RegisterInterface> ToggleableOutputPin for GpioLine<R> {
    type Error = PlatformError;

    fn toggle(&mut self) -> Result<(), PlatformError> {
        self.toggle_bit()
    }
}

impl<R: RegisterInterface> InputPin for GpioLine<R> {
    type Error = PlatformError;

    fn is_high(&self) -> Result<bool, PlatformError> {
        Ok(self.read_bit())
    }

    fn is_low(&self) -> Result<bool, PlatformError> {
        Ok(!self.read_bit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::gpio::Port;
    use crate::platform::mock::SimulatedRegisters;
    use crate::platform::traits::Direction;

    #[test]
    fn test_output_pin() {
        let regs = SimulatedRegisters::new();
        let mut led = GpioLine::new(regs, Port::D, 1).unwrap();
        led.set_direction(Direction::Output);

        led.set_high().unwrap();
        assert_eq!(led.is_set_high(), Ok(true));
        assert_eq!(InputPin::is_high(&led), Ok(true));

        ToggleableOutputPin::toggle(&mut led).unwrap();
        assert_eq!(led.is_set_low(), Ok(true));
        assert_eq!(InputPin::is_low(&led), Ok(true));
    }

    #[test]
    fn test_output_pin_on_input_sets_latch() {
        let regs = SimulatedRegisters::new();
        let mut key = GpioLine::new(regs.clone(), Port::A, 1).unwrap();

        assert_eq!(key.set_high(), Ok(()));
        assert_eq!(key.is_set_high(), Ok(true));
        regs.drive_input(0, 1, Some(false));
        assert_eq!(key.is_low(), Ok(true));

        regs.drive_input(0, 1, Some(true));
        assert_eq!(key.is_high(), Ok(true));
    }
}
