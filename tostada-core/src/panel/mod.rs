//! Shade panel
//!
//! The panel owns all session state: the selected shade, the last shade
//! sent to the toaster controller, and the selector box geometry used for
//! hit testing. Rendering, touch dispatch and transmission all take the
//! state by `&mut` together with the collaborator they drive.
//!
//! ```text
//!   poll_once ──► hit_test ──► select ──► render ──► send_if_changed
//!       │                                                  │
//!   TouchSensor                                        ShadeLink
//! ```

mod dispatch;
mod render;
mod transmit;

#[cfg(test)]
pub(crate) mod mock;

use crate::config::PanelConfig;
use crate::layout::{Point, Rect};
use crate::shade::{Shade, SHADE_COUNT};
use crate::traits::{DisplayError, LinkError, TouchError};

/// Result of one [`PanelState::send_if_changed`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendOutcome {
    /// Selection matches the last sent shade; nothing was written
    Unchanged,
    /// Shade written to the link
    Sent(Shade),
    /// Write attempted and failed; the shade still counts as sent
    Failed(Shade, LinkError),
}

impl SendOutcome {
    /// Shade a transmission was attempted for, if any
    pub fn attempted(&self) -> Option<Shade> {
        match self {
            SendOutcome::Unchanged => None,
            SendOutcome::Sent(shade) | SendOutcome::Failed(shade, _) => Some(*shade),
        }
    }
}

/// Result of one [`PanelState::poll_once`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollOutcome {
    /// No contact on the screen
    Idle,
    /// Touch controller could not be read; treated as no contact
    TouchFailed(TouchError),
    /// Contact outside every selector box
    Miss(Point),
    /// Contact on the box that is already selected
    AlreadySelected(Shade),
    /// Selection changed, screen repainted and link notified
    Changed {
        shade: Shade,
        render: Result<(), DisplayError>,
        send: SendOutcome,
    },
}

/// Session state of the shade panel
#[derive(Debug, Clone)]
pub struct PanelState {
    config: PanelConfig,
    selection: Shade,
    last_sent: Option<Shade>,
    boxes: [Rect; SHADE_COUNT],
}

impl PanelState {
    /// Create panel state with the lightest shade selected
    ///
    /// Box geometry is computed up front so hit testing is valid even
    /// before the first render.
    pub fn new(config: PanelConfig) -> Self {
        Self {
            boxes: config.layout.selector_boxes(),
            config,
            selection: Shade::default(),
            last_sent: None,
        }
    }

    /// Currently selected shade
    pub fn selection(&self) -> Shade {
        self.selection
    }

    /// Last shade written to the link (`None` before the first send)
    pub fn last_sent(&self) -> Option<Shade> {
        self.last_sent
    }

    /// Selector box geometry, indexed like [`Shade::ALL`]
    pub fn boxes(&self) -> &[Rect; SHADE_COUNT] {
        &self.boxes
    }

    /// Panel configuration
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new(PanelConfig::default())
    }
}
