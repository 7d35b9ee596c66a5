//! Board-agnostic core logic for the shade panel firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (display, touch sensor, shade link)
//! - Shade palette and RGB565 colors
//! - Selector box layout and hit testing
//! - Panel state with the render / poll / transmit operations
//! - Compile-time panel configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod layout;
pub mod panel;
pub mod shade;
pub mod traits;

pub use color::Color;
pub use config::{ConfigError, PanelConfig, PanelLayout};
pub use layout::{Point, Rect};
pub use panel::{PanelState, PollOutcome, SendOutcome};
pub use shade::{Shade, SHADE_COUNT};
