//! Panel configuration
//!
//! Compile-time configuration for the shade panel. There is no runtime
//! configuration file; boards override fields of the defaults instead.

use crate::color::Color;
use crate::layout::{Point, Rect};
use crate::shade::SHADE_COUNT;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Box size or inset leaves no room for the shade swatch
    EmptySwatch,
    /// Two selector boxes share pixels, so a touch could hit both
    OverlappingBoxes,
}

/// Geometry of the selector row and label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelLayout {
    /// X of the leftmost box
    pub start_x: i32,
    /// Y of the box row
    pub start_y: i32,
    /// Box width and height
    pub box_size: i32,
    /// Distance between the left edges of neighbouring boxes
    pub spacing: i32,
    /// Gap between box border and shade swatch
    pub inset: i32,
    /// Top-left of the "Shade: N" label
    pub label_origin: Point,
}

impl PanelLayout {
    /// Three 30x30 boxes at x = 50, 100, 150 on row y = 100
    pub const DEFAULT: Self = Self {
        start_x: 50,
        start_y: 100,
        box_size: 30,
        spacing: 50,
        inset: 2,
        label_origin: Point::new(75, 60),
    };

    /// Box geometry for the shade at `index`
    pub const fn selector_box(&self, index: usize) -> Rect {
        Rect::new(
            self.start_x + index as i32 * self.spacing,
            self.start_y,
            self.box_size,
            self.box_size,
        )
    }

    /// Box geometry for all shades, left to right
    pub fn selector_boxes(&self) -> [Rect; SHADE_COUNT] {
        core::array::from_fn(|i| self.selector_box(i))
    }

    /// Check that the layout gives every shade a distinct touch target
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.box_size - 2 * self.inset <= 0 {
            return Err(ConfigError::EmptySwatch);
        }

        let boxes = self.selector_boxes();
        for (i, a) in boxes.iter().enumerate() {
            if boxes[i + 1..].iter().any(|b| a.touches(b)) {
                return Err(ConfigError::OverlappingBoxes);
            }
        }

        Ok(())
    }
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Full panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Selector row and label geometry
    pub layout: PanelLayout,
    /// Border of unselected boxes
    pub border: Color,
    /// Border of the selected box
    pub highlight: Color,
    /// Label text color
    pub label: Color,
}

impl PanelConfig {
    /// White borders, green highlight, white label
    pub const DEFAULT: Self = Self {
        layout: PanelLayout::DEFAULT,
        border: Color::WHITE,
        highlight: Color::GREEN,
        label: Color::WHITE,
    };
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
