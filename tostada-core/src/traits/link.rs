//! Shade link trait
//!
//! The link carries the selected shade to the toaster controller.

use crate::shade::Shade;

/// Errors that can occur while sending a shade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// Controller did not acknowledge (absent or busy)
    Nack,
    /// Bus fault (arbitration, misplaced start/stop)
    Bus,
    /// Transaction timed out
    Timeout,
    /// Any other transport failure
    Other,
}

/// Trait for the controller link
///
/// Sends are fire-and-forget: there is no acknowledgment beyond what the
/// transport itself reports, and no read-back.
pub trait ShadeLink {
    /// Send the selected shade
    fn send(&mut self, shade: Shade) -> Result<(), LinkError>;
}
