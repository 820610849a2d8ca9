//! Blink the green LED while a key is released
//!
//! Every ~0.4 s TPM2 session the key on PTA1 is sampled: released (pulled
//! high), the LED toggles; held low, the LED is switched off.
//!
//! # Hardware
//!
//! FRDM-KL25Z - green LED on PTB19 (active low), key between PTA1 and GND
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --target thumbv6m-none-eabi \
//!     --no-default-features --features demo --bin blink_on_key
//! ```

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use kl25z_hal::devices::tpm::TpmConfig;
use kl25z_hal::platform::kl25z::Kl25zPlatform;
use kl25z_hal::platform::traits::{Direction, Platform, Pull};
use kl25z_hal::Divider;
use {defmt_rtt as _, panic_halt as _};

/// Flash configuration field at 0x400: backdoor key, FPROT, FSEC, FOPT,
/// FEPROT, FDPROT. FSEC = 0xFE leaves the chip unsecured.
#[link_section = ".flash_config"]
#[used]
static FLASH_CONFIG: [u8; 16] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, //
    0xFF, 0xFF, 0xFF, 0xFF, //
    0xFE, 0xFF, 0xFF, 0xFF,
];

const GREEN_LED: (u8, u8) = (1, 19);
const KEY: (u8, u8) = (0, 1);

#[entry]
fn main() -> ! {
    let Ok(mut platform) = Kl25zPlatform::init() else {
        defmt::panic!("platform already taken");
    };

    let mut tpm = match platform.create_delay(2, TpmConfig::with_divider(Divider::Div128)) {
        Ok(tpm) => tpm,
        Err(e) => defmt::panic!("TPM2: {}", e),
    };
    let mut led = match platform.create_line(GREEN_LED.0, GREEN_LED.1) {
        Ok(line) => line,
        Err(e) => defmt::panic!("LED: {}", e),
    };
    let mut key = match platform.create_line(KEY.0, KEY.1) {
        Ok(line) => line,
        Err(e) => defmt::panic!("key: {}", e),
    };

    led.set_direction(Direction::Output);
    key.set_direction(Direction::Input);
    key.set_pull(Pull::Up);

    defmt::info!("blink_on_key running");

    loop {
        if let Err(e) = tpm.wait_delay(0xFFFF) {
            defmt::warn!("TPM2: {}", e);
        }

        let result = if key.read_bit() {
            led.toggle_bit()
        } else {
            led.write_bit(true)
        };
        if let Err(e) = result {
            defmt::warn!("LED: {}", e);
        }
    }
}
