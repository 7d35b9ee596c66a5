//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in tostada-core, written against the `tostada-hal` bus traits:
//!
//! - Touch controllers (FT6206 / FT6236 / FT6336 capacitive)
//! - Shade link to the toaster controller over I2C

#![no_std]
#![deny(unsafe_code)]

pub mod link;
pub mod touch;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod mock_bus;
