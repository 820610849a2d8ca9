//! kl25z_hal_core - Pure no_std timing logic for kl25z_hal
//!
//! This crate contains the hardware-free parts of the TPM delay driver so they
//! can be tested on host without any register access.
//!
//! # Design Principles
//!
//! - **Pure no_std**: No std library dependencies
//! - **No registers**: Register side effects are described, never performed
//!
//! # Modules
//!
//! - [`delay`]: Prescaler divider, tick/time conversion, and the delay
//!   session state machine

#![no_std]

pub mod delay;
