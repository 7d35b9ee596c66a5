//! Presentation

use core::fmt::Write;

use heapless::String;

use super::PanelState;
use crate::shade::Shade;
use crate::traits::{DisplayDriver, DisplayError};

/// Longest label: "Shade: N"
const LABEL_LEN: usize = 16;

impl PanelState {
    /// Repaint the whole screen for the current selection
    ///
    /// Order: background fill in the selected shade, the label, then the
    /// three boxes left to right with the selected one's border redrawn in
    /// the highlight color. The box table is refreshed before drawing, so
    /// a display failure part-way through still leaves it current.
    pub fn render<D>(&mut self, display: &mut D) -> Result<(), DisplayError>
    where
        D: DisplayDriver + ?Sized,
    {
        let layout = self.config.layout;
        self.boxes = layout.selector_boxes();

        display.fill_screen(self.selection.color())?;

        let mut label: String<LABEL_LEN> = String::new();
        let _ = write!(label, "Shade: {}", self.selection.number());
        display.draw_text(layout.label_origin, &label, self.config.label)?;

        for (shade, rect) in Shade::ALL.iter().zip(self.boxes.iter()) {
            display.draw_rect(*rect, self.config.border)?;
            display.fill_rect(rect.inset(layout.inset), shade.color())?;

            if *shade == self.selection {
                display.draw_rect(*rect, self.config.highlight)?;
            }
        }

        display.flush()
    }
}
