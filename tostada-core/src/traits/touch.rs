//! Touch sensor trait

use crate::layout::Point;

/// Errors that can occur while reading the touch controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchError {
    /// Bus transaction failed
    Bus,
    /// Controller returned a report that could not be parsed
    Malformed,
}

/// Trait for touch input
///
/// The panel only ever looks at the first contact.
pub trait TouchSensor {
    /// Number of contacts currently on the screen
    fn contact_count(&mut self) -> Result<u8, TouchError>;

    /// Coordinates of the first contact in display pixel space
    ///
    /// Returns `Ok(None)` if the contact lifted since the count was read.
    fn first_contact(&mut self) -> Result<Option<Point>, TouchError>;
}
