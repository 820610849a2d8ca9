//! Blink-on-key loop run against the simulated board

#![cfg(feature = "mock")]

use kl25z_hal::platform::mock::{MockPlatform, SimulatedRegisters};
use kl25z_hal::platform::traits::{DelayTimer, DigitalLine, Direction, Platform, Pull};
use kl25z_hal::{Divider, GpioLine, PlatformError, TpmConfig};

const GREEN_LED: (u8, u8) = (1, 19);
const KEY: (u8, u8) = (0, 1);

struct Board {
    platform: MockPlatform,
    led: GpioLine<SimulatedRegisters>,
    key: GpioLine<SimulatedRegisters>,
}

fn board() -> (Board, kl25z_hal::TpmDelay<SimulatedRegisters>) {
    let mut platform = MockPlatform::new();
    // Keeps busy-waits finite: 4096 clocks per register read
    platform.bank().set_auto_advance(4096);

    let tpm = platform
        .create_delay(2, TpmConfig::with_divider(Divider::Div128))
        .unwrap();
    let mut led = platform.create_line(GREEN_LED.0, GREEN_LED.1).unwrap();
    let mut key = platform.create_line(KEY.0, KEY.1).unwrap();

    led.set_direction(Direction::Output);
    key.set_direction(Direction::Input);
    key.set_pull(Pull::Up);

    (Board { platform, led, key }, tpm)
}

/// One iteration of the demo loop, written against the traits only
fn step<T, L, K>(timer: &mut T, led: &mut L, key: &K) -> Result<(), PlatformError>
where
    T: DelayTimer,
    L: DigitalLine,
    K: DigitalLine,
{
    timer.wait_delay(0xFFFF)?;
    if key.read_bit() {
        led.toggle_bit()
    } else {
        led.write_bit(true)
    }
}

#[test]
fn led_blinks_while_key_released() {
    let (mut board, mut tpm) = board();
    let mut levels = Vec::new();

    for _ in 0..4 {
        step(&mut tpm, &mut board.led, &board.key).unwrap();
        levels.push(board.led.read_bit());
    }
    assert_eq!(levels, [true, false, true, false]);
}

#[test]
fn led_held_off_while_key_pressed() {
    let (mut board, mut tpm) = board();
    board.platform.bank().drive_input(KEY.0, KEY.1, Some(false));

    for _ in 0..3 {
        step(&mut tpm, &mut board.led, &board.key).unwrap();
        assert!(board.led.read_bit());
    }

    // Releasing the key resumes blinking from the off level
    board.platform.bank().drive_input(KEY.0, KEY.1, None);
    step(&mut tpm, &mut board.led, &board.key).unwrap();
    assert!(!board.led.read_bit());
}

#[test]
fn each_iteration_takes_one_full_session() {
    let (board, mut tpm) = board();
    let mut led = board.led;
    let bank = board.platform.bank().clone();

    let start = bank.elapsed_clocks();
    step(&mut tpm, &mut led, &board.key).unwrap();
    let elapsed = bank.elapsed_clocks() - start;

    // 65535 ticks at /128, plus the reads around the session
    assert!(elapsed >= 65_535 * 128);
    assert!(elapsed < 65_535 * 128 + 16 * 4096);
}

#[test]
fn board_pins_cannot_be_claimed_twice() {
    let (mut board, _tpm) = board();
    assert_eq!(
        board.platform.create_line(GREEN_LED.0, GREEN_LED.1).map(|_| ()),
        Err(PlatformError::ResourceUnavailable)
    );
    assert_eq!(
        board
            .platform
            .create_delay(2, TpmConfig::default())
            .map(|_| ()),
        Err(PlatformError::ResourceUnavailable)
    );
}
