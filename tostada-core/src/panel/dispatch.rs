//! Input dispatch

use super::{PanelState, PollOutcome};
use crate::layout::Point;
use crate::shade::Shade;
use crate::traits::{DisplayDriver, ShadeLink, TouchSensor};

impl PanelState {
    /// Find the box a touch should select
    ///
    /// Boxes are checked in index order and the first box that contains the
    /// point and is not already selected wins. A point on the selected box
    /// alone yields `None`.
    pub fn hit_test(&self, point: Point) -> Option<Shade> {
        self.boxes
            .iter()
            .zip(Shade::ALL)
            .find(|(rect, shade)| rect.contains(point) && *shade != self.selection)
            .map(|(_, shade)| shade)
    }

    /// Service the touch sensor once
    ///
    /// Reads at most one contact and performs at most one selection change,
    /// followed by a repaint and a transmission. Touch read failures count
    /// as no contact.
    pub fn poll_once<T, D, L>(
        &mut self,
        touch: &mut T,
        display: &mut D,
        link: &mut L,
    ) -> PollOutcome
    where
        T: TouchSensor + ?Sized,
        D: DisplayDriver + ?Sized,
        L: ShadeLink + ?Sized,
    {
        match touch.contact_count() {
            Ok(0) => return PollOutcome::Idle,
            Ok(_) => {}
            Err(e) => return PollOutcome::TouchFailed(e),
        }

        let point = match touch.first_contact() {
            Ok(Some(point)) => point,
            Ok(None) => return PollOutcome::Idle,
            Err(e) => return PollOutcome::TouchFailed(e),
        };

        match self.hit_test(point) {
            Some(shade) => {
                self.selection = shade;
                let render = self.render(display);
                let send = self.send_if_changed(link);
                PollOutcome::Changed {
                    shade,
                    render,
                    send,
                }
            }
            None if self.boxes[self.selection.index()].contains(point) => {
                PollOutcome::AlreadySelected(self.selection)
            }
            None => PollOutcome::Miss(point),
        }
    }
}
