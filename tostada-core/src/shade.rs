//! Toast shades
//!
//! The fixed, ordered set of doneness levels the panel offers, lightest
//! first. The ordinal is what goes over the wire to the toaster controller.

use tostada_protocol::ShadeMessage;

use crate::color::Color;

/// Number of selectable shades
pub const SHADE_COUNT: usize = 3;

const _: () = assert!(tostada_protocol::SHADE_COUNT as usize == SHADE_COUNT);

/// Toast shade selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Shade {
    /// Light brown
    #[default]
    Light,
    /// Medium brown
    Medium,
    /// Dark brown
    Dark,
}

impl Shade {
    /// All shades in display order (left to right)
    pub const ALL: [Shade; SHADE_COUNT] = [Shade::Light, Shade::Medium, Shade::Dark];

    /// Look up a shade by its position
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Shade::Light),
            1 => Some(Shade::Medium),
            2 => Some(Shade::Dark),
            _ => None,
        }
    }

    /// Position in the shade list (0-based)
    pub const fn index(self) -> usize {
        match self {
            Shade::Light => 0,
            Shade::Medium => 1,
            Shade::Dark => 2,
        }
    }

    /// Number shown to the user (1-based)
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Fill color for this shade
    pub const fn color(self) -> Color {
        match self {
            Shade::Light => Color::from_rgb888(235, 175, 105),
            Shade::Medium => Color::from_rgb888(190, 120, 65),
            Shade::Dark => Color::from_rgb888(145, 75, 30),
        }
    }

    /// Wire message carrying this shade
    pub const fn message(self) -> ShadeMessage {
        match self {
            Shade::Light => ShadeMessage::LIGHT,
            Shade::Medium => ShadeMessage::MEDIUM,
            Shade::Dark => ShadeMessage::DARK,
        }
    }
}

impl From<ShadeMessage> for Shade {
    fn from(msg: ShadeMessage) -> Self {
        match msg.index() {
            0 => Shade::Light,
            1 => Shade::Medium,
            _ => Shade::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_display_order() {
        for (i, shade) in Shade::ALL.iter().enumerate() {
            assert_eq!(shade.index(), i);
            assert_eq!(Shade::from_index(i), Some(*shade));
        }
        assert_eq!(Shade::from_index(SHADE_COUNT), None);
    }

    #[test]
    fn test_number_is_one_based() {
        assert_eq!(Shade::Light.number(), 1);
        assert_eq!(Shade::Dark.number(), 3);
    }

    #[test]
    fn test_default_is_lightest() {
        assert_eq!(Shade::default(), Shade::Light);
    }

    #[test]
    fn test_colors_get_darker() {
        let raws = Shade::ALL.map(|s| s.color());
        assert_eq!(raws[0], Color::from_rgb888(235, 175, 105));
        assert!(raws[0].r() > raws[1].r() && raws[1].r() > raws[2].r());
        assert!(raws[0].g() > raws[1].g() && raws[1].g() > raws[2].g());
    }

    #[test]
    fn test_message_carries_index() {
        for shade in Shade::ALL {
            assert_eq!(shade.message().index() as usize, shade.index());
            assert_eq!(Shade::from(shade.message()), shade);
        }
    }
}
