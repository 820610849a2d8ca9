use std::env;
use std::fs;
use std::path::PathBuf;

/// FLL output after reset (32.768 kHz IRC * 640)
const DEFAULT_TPM_CLOCK_HZ: &str = "20971520";

fn main() {
    // TPM module input clock, used as the default tick source frequency.
    // Override when the application reconfigures MCG before creating timers.
    if let Ok(hz) = env::var("KL25Z_TPM_CLOCK_HZ") {
        if hz.is_empty() || !hz.bytes().all(|b| b.is_ascii_digit()) {
            panic!("KL25Z_TPM_CLOCK_HZ must be a decimal integer, got {:?}", hz);
        }
        println!("cargo:rustc-env=KL25Z_TPM_CLOCK_HZ={}", hz);
        println!("cargo:warning=Using KL25Z_TPM_CLOCK_HZ from environment: {}", hz);
    } else {
        println!("cargo:rustc-env=KL25Z_TPM_CLOCK_HZ={}", DEFAULT_TPM_CLOCK_HZ);
    }

    // Linker script for the on-target demo
    if env::var("TARGET").is_ok_and(|t| t.starts_with("thumbv6m")) {
        let out = PathBuf::from(env::var_os("OUT_DIR").unwrap());
        fs::copy("memory.x", out.join("memory.x")).unwrap();
        println!("cargo:rustc-link-search={}", out.display());
        println!("cargo:rerun-if-changed=memory.x");
    }

    println!("cargo:rerun-if-env-changed=KL25Z_TPM_CLOCK_HZ");
    println!("cargo:rerun-if-changed=build.rs");
}
