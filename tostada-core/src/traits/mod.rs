//! Hardware abstraction traits
//!
//! These traits define the interface between the panel logic and the
//! hardware-specific implementations in `tostada-drivers` and
//! `tostada-display`.

pub mod display;
pub mod link;
pub mod touch;

pub use display::{DisplayDriver, DisplayError};
pub use link::{LinkError, ShadeLink};
pub use touch::{TouchError, TouchSensor};
