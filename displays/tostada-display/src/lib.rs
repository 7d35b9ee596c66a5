//! Display support for the Tostada shade panel
//!
//! This crate provides:
//! - `GraphicsBackend`, the core `DisplayDriver` trait on top of any
//!   `embedded-graphics` RGB565 draw target
//! - `Ili9341`, a blocking SPI driver for the 320x240 TFT on the reference
//!   board
//!
//! # Architecture
//!
//! ```text
//! PanelState::render ──► DisplayDriver ──► GraphicsBackend ──► DrawTarget
//!                         (tostada-core)                        (Ili9341, or a
//!                                                                 framebuffer in tests)
//! ```

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod ili9341;

pub use backend::GraphicsBackend;
pub use ili9341::{Ili9341, Ili9341Error};
