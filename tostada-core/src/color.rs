//! RGB565 colors
//!
//! The panel works in the display's native 16-bit format so fills and
//! borders can be pushed to the controller without conversion.

/// A 16-bit packed RGB565 color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(u16);

impl Color {
    /// Pure white
    pub const WHITE: Self = Self(0xFFFF);

    /// Pure black
    pub const BLACK: Self = Self(0x0000);

    /// Pure green (selection highlight)
    pub const GREEN: Self = Self(0x07E0);

    /// Wrap an already-packed RGB565 value
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Pack 8-bit red, green and blue channels into RGB565
    ///
    /// Keeps the top 5 bits of red and blue and the top 6 bits of green.
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        let r = (r as u16 & 0xF8) << 8;
        let g = (g as u16 & 0xFC) << 3;
        let b = b as u16 >> 3;
        Self(r | g | b)
    }

    /// Raw RGB565 value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Red channel (0-31)
    pub const fn r(self) -> u8 {
        (self.0 >> 11) as u8
    }

    /// Green channel (0-63)
    pub const fn g(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    /// Blue channel (0-31)
    pub const fn b(self) -> u8 {
        (self.0 & 0x1F) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_primaries() {
        assert_eq!(Color::from_rgb888(255, 255, 255), Color::WHITE);
        assert_eq!(Color::from_rgb888(0, 0, 0), Color::BLACK);
        assert_eq!(Color::from_rgb888(0, 255, 0), Color::GREEN);
        assert_eq!(Color::from_rgb888(255, 0, 0).raw(), 0xF800);
        assert_eq!(Color::from_rgb888(0, 0, 255).raw(), 0x001F);
    }

    #[test]
    fn test_pack_drops_low_bits() {
        // 235 = 0b11101_011, 175 = 0b101011_11, 105 = 0b01101_001
        let c = Color::from_rgb888(235, 175, 105);
        assert_eq!(c.r(), 0b11101);
        assert_eq!(c.g(), 0b101011);
        assert_eq!(c.b(), 0b01101);
        assert_eq!(c.raw(), 0xED6D);
    }
}
