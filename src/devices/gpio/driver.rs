//! GPIO line driver implementation

use super::port::Port;
use super::registers::*;
use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{Direction, DigitalLine, Pull, RegisterInterface},
    Result,
};

/// One GPIO pin
///
/// Direction and pull live in the hardware registers; the driver caches
/// nothing but addresses.
#[derive(Debug)]
pub struct GpioLine<R: RegisterInterface> {
    regs: R,
    port: Port,
    pin: u8,
    mask: u32,
    gpio_base: u32,
    pcr: u32,
}

impl<R: RegisterInterface> GpioLine<R> {
    /// Route `pin` on `port` to GPIO
    ///
    /// Opens the port clock gate and writes the pin control register with
    /// the GPIO mux selection and no pull resistor. Direction is left as the
    /// hardware holds it (input after reset).
    ///
    /// # Errors
    ///
    /// Returns `GpioError::InvalidPin` if the pin is not on a board header.
    pub fn new(regs: R, port: Port, pin: u8) -> Result<Self> {
        if !port.has_pin(pin) {
            crate::log_warn!("PT{}{} is not a header pin", port.letter(), pin);
            return Err(PlatformError::Gpio(GpioError::InvalidPin));
        }

        port.clock_gate().activate(&regs);
        let pcr = port.pcr_address(pin);
        regs.write(pcr, MUX_GPIO << PCR_MUX_SHIFT);

        crate::log_debug!("PT{}{}: GPIO", port.letter(), pin);
        Ok(Self {
            regs,
            port,
            pin,
            mask: 1 << pin,
            gpio_base: port.gpio_base(),
            pcr,
        })
    }

    /// Port this line belongs to
    pub fn port(&self) -> Port {
        self.port
    }

    /// Pin number within the port
    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Set the PDDR bit: output drives the latch onto the pin
    pub fn set_direction(&mut self, direction: Direction) {
        let pddr = self.gpio_base + PDDR;
        match direction {
            Direction::Output => self.regs.set_bits(pddr, self.mask),
            Direction::Input => self.regs.clear_bits(pddr, self.mask),
        }
    }

    /// Direction as read back from PDDR
    pub fn direction(&self) -> Direction {
        if self.regs.read(self.gpio_base + PDDR) & self.mask != 0 {
            Direction::Output
        } else {
            Direction::Input
        }
    }

    /// Select the pull resistor, keeping the mux field
    pub fn set_pull(&mut self, pull: Pull) {
        let select = match pull {
            Pull::None => 0,
            Pull::Up => PCR_PE | PCR_PS,
        };
        self.regs
            .modify(self.pcr, |v| (v & !(PCR_PE | PCR_PS)) | select);
    }

    /// Pull resistor currently selected in the pin control register
    pub fn pull(&self) -> Pull {
        if self.regs.read(self.pcr) & (PCR_PE | PCR_PS) == PCR_PE | PCR_PS {
            Pull::Up
        } else {
            Pull::None
        }
    }

    /// Sampled pin level
    pub fn read_bit(&self) -> bool {
        self.regs.read(self.gpio_base + PDIR) & self.mask != 0
    }

    /// Level held in the output latch, whatever the direction
    pub fn output_latch(&self) -> bool {
        self.regs.read(self.gpio_base + PDOR) & self.mask != 0
    }

    /// Set or clear the output latch through PSOR/PCOR
    ///
    /// Works in either direction. On an input the level is held in the latch
    /// and appears on the pin once the direction is switched to output.
    pub fn write_bit(&mut self, high: bool) -> Result<()> {
        let offset = if high { PSOR } else { PCOR };
        self.regs.write(self.gpio_base + offset, self.mask);
        Ok(())
    }

    /// Invert the output latch through PTOR
    pub fn toggle_bit(&mut self) -> Result<()> {
        self.regs.write(self.gpio_base + PTOR, self.mask);
        Ok(())
    }
}

impl<R: RegisterInterface> DigitalLine for GpioLine<R> {
    fn set_direction(&mut self, direction: Direction) {
        GpioLine::set_direction(self, direction)
    }

    fn direction(&self) -> Direction {
        GpioLine::direction(self)
    }

    fn set_pull(&mut self, pull: Pull) {
        GpioLine::set_pull(self, pull)
    }

    fn read_bit(&self) -> bool {
        GpioLine::read_bit(self)
    }

    fn write_bit(&mut self, high: bool) -> Result<()> {
        GpioLine::write_bit(self, high)
    }

    fn toggle_bit(&mut self) -> Result<()> {
        GpioLine::toggle_bit(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::sim::registers::SIM_SCGC5;
    use crate::platform::mock::SimulatedRegisters;

    const GPIOB: u32 = 0x400F_F040;
    const PTB18_PCR: u32 = 0x4004_A048;

    fn green_led(regs: &SimulatedRegisters) -> GpioLine<SimulatedRegisters> {
        GpioLine::new(regs.clone(), Port::B, 18).unwrap()
    }

    #[test]
    fn test_construction_routes_pin() {
        let regs = SimulatedRegisters::new();
        regs.poke(PTB18_PCR, PCR_PE | PCR_PS);
        let line = green_led(&regs);

        assert_eq!(regs.peek(SIM_SCGC5), 1 << 10);
        assert_eq!(regs.peek(PTB18_PCR), 0x100);
        assert_eq!(line.direction(), Direction::Input);
        assert_eq!(line.pull(), Pull::None);
        assert_eq!((line.port(), line.pin()), (Port::B, 18));
    }

    #[test]
    fn test_rejects_non_header_pin() {
        let regs = SimulatedRegisters::new();
        assert_eq!(
            GpioLine::new(regs.clone(), Port::A, 0).map(|_| ()),
            Err(PlatformError::Gpio(GpioError::InvalidPin))
        );
        // Nothing touched
        assert_eq!(regs.peek(SIM_SCGC5), 0);
    }

    #[test]
    fn test_direction_bit() {
        let regs = SimulatedRegisters::new();
        regs.poke(GPIOB + PDDR, 1 << 3);
        let mut line = green_led(&regs);

        line.set_direction(Direction::Output);
        assert_eq!(regs.peek(GPIOB + PDDR), (1 << 3) | (1 << 18));
        line.set_direction(Direction::Input);
        assert_eq!(regs.peek(GPIOB + PDDR), 1 << 3);
    }

    #[test]
    fn test_pull_encoding() {
        let regs = SimulatedRegisters::new();
        let mut line = green_led(&regs);

        line.set_pull(Pull::Up);
        assert_eq!(regs.peek(PTB18_PCR), 0x103);
        assert_eq!(line.pull(), Pull::Up);

        line.set_pull(Pull::None);
        assert_eq!(regs.peek(PTB18_PCR), 0x100);
    }

    #[test]
    fn test_write_and_toggle() {
        let regs = SimulatedRegisters::new();
        let mut line = green_led(&regs);
        line.set_direction(Direction::Output);

        line.write_bit(true).unwrap();
        assert!(line.read_bit());
        assert!(line.output_latch());

        line.toggle_bit().unwrap();
        assert!(!line.read_bit());

        line.toggle_bit().unwrap();
        line.write_bit(false).unwrap();
        assert!(!line.read_bit());
        assert_eq!(regs.peek(GPIOB + PDOR), 0);
    }

    #[test]
    fn test_latch_preset_before_output() {
        let regs = SimulatedRegisters::new();
        let mut line = green_led(&regs);
        assert_eq!(line.direction(), Direction::Input);

        // Latch changes while the pin still reads its input level
        line.write_bit(true).unwrap();
        assert!(line.output_latch());
        assert!(!line.read_bit());
        assert_eq!(regs.peek(GPIOB + PDOR), 1 << 18);

        line.toggle_bit().unwrap();
        assert!(!line.output_latch());
        line.toggle_bit().unwrap();

        line.set_direction(Direction::Output);
        assert!(line.read_bit());
    }

    #[test]
    fn test_input_with_pull_up() {
        let regs = SimulatedRegisters::new();
        let mut key = GpioLine::new(regs.clone(), Port::A, 1).unwrap();
        assert!(!key.read_bit());

        key.set_pull(Pull::Up);
        assert!(key.read_bit());

        regs.drive_input(0, 1, Some(false));
        assert!(!key.read_bit());
    }

    #[test]
    fn test_digital_line_trait() {
        fn blink<L: DigitalLine>(line: &mut L) -> Result<bool> {
            line.set_direction(Direction::Output);
            line.write_bit(false)?;
            line.toggle_bit()?;
            Ok(line.read_bit())
        }

        let regs = SimulatedRegisters::new();
        let mut line = green_led(&regs);
        assert_eq!(blink(&mut line), Ok(true));
        assert_eq!(DigitalLine::direction(&line), Direction::Output);
    }
}
