//! RP2040-specific HAL for the panel firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `tostada-hal` traits:
//!
//! - Blocking I2C master (implements `tostada_hal::I2cBus`)
//! - Conversion from `tostada_hal::I2cConfig` to embassy-rp bus config

#![no_std]

pub mod i2c;

// Re-export shared traits from tostada-hal for convenience
pub use tostada_hal::{I2cBus, I2cBusError, I2cConfig};
