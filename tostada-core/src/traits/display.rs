//! Display driver trait for the panel screen

use crate::color::Color;
use crate::layout::{Point, Rect};

/// Errors that can occur while drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
}

/// Trait for drawing the panel
///
/// Provides the handful of primitives the panel needs. Implementations
/// handle the specifics of the attached controller.
pub trait DisplayDriver {
    /// Fill the whole screen with one color
    fn fill_screen(&mut self, color: Color) -> Result<(), DisplayError>;

    /// Draw a one-pixel rectangle outline
    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), DisplayError>;

    /// Fill a rectangle
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), DisplayError>;

    /// Draw text with its top-left corner at `origin`
    fn draw_text(&mut self, origin: Point, text: &str, color: Color) -> Result<(), DisplayError>;

    /// Flush buffered content to the display
    ///
    /// Unbuffered displays draw immediately and can keep the default.
    fn flush(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }
}
