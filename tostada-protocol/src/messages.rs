//! Shade selection message
//!
//! The payload is the raw shade ordinal, lightest first.

/// 7-bit I2C address of the toaster controller
pub const PEER_ADDRESS: u8 = 0x08;

/// Number of shades the protocol can carry
pub const SHADE_COUNT: u8 = 3;

/// Bytes per transmission
pub const MESSAGE_LEN: usize = 1;

/// Errors when decoding a received payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WireError {
    /// Payload was empty
    Empty,
    /// Payload carried more than one byte
    TooLong,
    /// Shade index outside 0..SHADE_COUNT
    InvalidShade(u8),
}

/// Selected shade as carried on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShadeMessage {
    index: u8,
}

impl ShadeMessage {
    /// Lightest shade
    pub const LIGHT: Self = Self { index: 0 };

    /// Middle shade
    pub const MEDIUM: Self = Self { index: 1 };

    /// Darkest shade
    pub const DARK: Self = Self { index: 2 };

    /// Create a message for a shade index
    ///
    /// Returns `None` if the index is out of range.
    pub const fn new(index: u8) -> Option<Self> {
        if index < SHADE_COUNT {
            Some(Self { index })
        } else {
            None
        }
    }

    /// Shade index (0 = lightest)
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Encode to wire bytes
    pub const fn encode(&self) -> [u8; MESSAGE_LEN] {
        [self.index]
    }

    /// Parse a single wire byte
    pub fn from_byte(byte: u8) -> Result<Self, WireError> {
        Self::new(byte).ok_or(WireError::InvalidShade(byte))
    }

    /// Decode a received payload
    pub fn decode(payload: &[u8]) -> Result<Self, WireError> {
        match payload {
            [] => Err(WireError::Empty),
            [byte] => Self::from_byte(*byte),
            _ => Err(WireError::TooLong),
        }
    }
}
