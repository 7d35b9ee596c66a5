//! I2C master interface
//!
//! Both panel-side devices hang off I2C: the touch controller (register
//! reads) and the toaster controller (one-byte writes). Drivers take any
//! `I2cBus`; the chip crate supplies the implementation.

use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};

/// Blocking I2C master
///
/// Addresses are 7-bit. Every call is one complete transaction, from START
/// to STOP.
pub trait I2cBus {
    /// Write `data` to the device at `address`
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cBusError>;

    /// Fill `buf` from the device at `address`
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), I2cBusError>;

    /// Write `write_data`, then read into `read_buf` after a repeated START
    ///
    /// Register reads put the register number in `write_data`.
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), I2cBusError>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cBusError> {
        T::write(self, address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), I2cBusError> {
        T::read(self, address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), I2cBusError> {
        T::write_read(self, address, write_data, read_buf)
    }
}

/// Failed I2C transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Bus error (misplaced start/stop)
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// Address or data byte not acknowledged
    Nack,
    /// Timeout
    Timeout,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl From<ErrorKind> for I2cBusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Bus => I2cBusError::Bus,
            ErrorKind::ArbitrationLoss => I2cBusError::ArbitrationLost,
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
            | ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data)
            | ErrorKind::NoAcknowledge(NoAcknowledgeSource::Unknown) => I2cBusError::Nack,
            ErrorKind::Overrun => I2cBusError::Overrun,
            _ => I2cBusError::Other,
        }
    }
}

/// Bus settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// SCL rate in Hz
    pub frequency: u32,
}

impl I2cConfig {
    /// 100 kHz; every I2C device supports it
    pub const STANDARD: Self = Self::with_frequency(100_000);

    /// 400 kHz
    pub const FAST: Self = Self::with_frequency(400_000);

    /// 1 MHz (Fm+ capable devices only)
    pub const FAST_PLUS: Self = Self::with_frequency(1_000_000);

    /// Settings for an arbitrary SCL rate
    pub const fn with_frequency(frequency: u32) -> Self {
        Self { frequency }
    }
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard_mode() {
        assert_eq!(I2cConfig::default(), I2cConfig::STANDARD);
        assert_eq!(I2cConfig::FAST.frequency, 400_000);
    }

    #[test]
    fn test_error_kind_mapping() {
        assert_eq!(
            I2cBusError::from(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)),
            I2cBusError::Nack
        );
        assert_eq!(
            I2cBusError::from(ErrorKind::ArbitrationLoss),
            I2cBusError::ArbitrationLost
        );
        assert_eq!(I2cBusError::from(ErrorKind::Other), I2cBusError::Other);
    }
}
