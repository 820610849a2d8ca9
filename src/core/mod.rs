//! Core infrastructure shared by every driver

pub mod logging;
