//! I2C bus driver for RP2040
//!
//! Wraps embassy-rp's blocking I2C master so drivers can talk to the touch
//! controller and the toaster controller through `tostada_hal::I2cBus`.

use embassy_rp::i2c::{self, Blocking, Instance, SclPin, SdaPin};
use embassy_rp::Peri;
use embedded_hal::i2c::{Error as _, I2c as EhI2c};
use tostada_hal::{I2cBus, I2cBusError, I2cConfig};

/// Blocking I2C bus adapter
///
/// Implements `I2cBus` for any blocking embedded-hal I2C master.
pub struct BlockingI2c<I> {
    inner: I,
}

/// Blocking I2C bus on one of the RP2040's I2C peripherals
pub type RpI2c<'d, T> = BlockingI2c<i2c::I2c<'d, T, Blocking>>;

impl<I> BlockingI2c<I> {
    /// Wrap an embedded-hal I2C master
    pub const fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Release the wrapped I2C master
    pub fn release(self) -> I {
        self.inner
    }
}

impl<I: EhI2c> I2cBus for BlockingI2c<I> {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cBusError> {
        self.inner
            .write(address, data)
            .map_err(|e| I2cBusError::from(e.kind()))
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), I2cBusError> {
        self.inner
            .read(address, buf)
            .map_err(|e| I2cBusError::from(e.kind()))
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), I2cBusError> {
        self.inner
            .write_read(address, write_data, read_buf)
            .map_err(|e| I2cBusError::from(e.kind()))
    }
}

/// Convert shared bus configuration into embassy-rp's I2C config
pub fn rp_config(config: &I2cConfig) -> i2c::Config {
    let mut rp = i2c::Config::default();
    rp.frequency = config.frequency;
    rp
}

/// Create a blocking I2C master on the given peripheral and pins
pub fn new_blocking<'d, T: Instance>(
    peri: Peri<'d, T>,
    scl: Peri<'d, impl SclPin<T>>,
    sda: Peri<'d, impl SdaPin<T>>,
    config: &I2cConfig,
) -> RpI2c<'d, T> {
    BlockingI2c::new(i2c::I2c::new_blocking(peri, scl, sda, rp_config(config)))
}
