//! Panel to Toaster Controller Protocol
//!
//! This crate defines the I2C protocol between the touchscreen panel (bus
//! master) and the toaster controller (bus slave). It is shared by both
//! firmwares so the encoding lives in one place.
//!
//! # Protocol Overview
//!
//! Every transmission is a single byte written to the controller's 7-bit
//! address:
//! ```text
//! ┌──────────────┐
//! │ SHADE INDEX  │
//! │ 1B (0..=2)   │
//! └──────────────┘
//! ```
//!
//! There is no framing, checksum or read-back. The panel only writes when
//! the selected shade changes.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod messages;

pub use messages::{ShadeMessage, WireError, MESSAGE_LEN, PEER_ADDRESS, SHADE_COUNT};
