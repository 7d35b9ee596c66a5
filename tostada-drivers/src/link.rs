//! I2C shade link
//!
//! Writes the selected shade as a single byte to the toaster controller.
//! The write is half-duplex and never read back.

use tostada_core::traits::{LinkError, ShadeLink};
use tostada_core::Shade;
use tostada_hal::{I2cBus, I2cBusError};
use tostada_protocol::PEER_ADDRESS;

/// Map a bus failure onto the link error space
fn link_error(e: I2cBusError) -> LinkError {
    match e {
        I2cBusError::Nack => LinkError::Nack,
        I2cBusError::Bus | I2cBusError::ArbitrationLost => LinkError::Bus,
        I2cBusError::Timeout => LinkError::Timeout,
        I2cBusError::Overrun | I2cBusError::Other => LinkError::Other,
    }
}

/// Shade link to a controller on an I2C bus
pub struct I2cShadeLink<B> {
    bus: B,
    address: u8,
}

impl<B: I2cBus> I2cShadeLink<B> {
    /// Create a link to the controller at the standard address
    pub fn new(bus: B) -> Self {
        Self::with_address(bus, PEER_ADDRESS)
    }

    /// Create a link to a controller at a non-standard address
    pub fn with_address(bus: B, address: u8) -> Self {
        Self { bus, address }
    }

    /// 7-bit address of the controller
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the underlying bus
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: I2cBus> ShadeLink for I2cShadeLink<B> {
    fn send(&mut self, shade: Shade) -> Result<(), LinkError> {
        self.bus
            .write(self.address, &shade.message().encode())
            .map_err(link_error)
    }
}
