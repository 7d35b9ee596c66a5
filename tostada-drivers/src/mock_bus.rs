//! Recording I2C bus for driver tests

use std::vec::Vec;

use tostada_hal::{I2cBus, I2cBusError};

pub struct MockBus {
    /// (address, payload) of every write, including the write half of
    /// write_read transactions
    pub writes: Vec<(u8, Vec<u8>)>,
    /// Bytes returned by the next read
    pub response: Vec<u8>,
    pub fail_with: Option<I2cBusError>,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            response: Vec::new(),
            fail_with: None,
        }
    }

    pub fn responding(response: &[u8]) -> Self {
        let mut bus = Self::new();
        bus.response = response.to_vec();
        bus
    }

    fn fill(&self, buf: &mut [u8]) {
        for (i, b) in buf.iter_mut().enumerate() {
            *b = self.response.get(i).copied().unwrap_or(0);
        }
    }
}

impl I2cBus for MockBus {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cBusError> {
        if let Some(e) = self.fail_with {
            return Err(e);
        }
        self.writes.push((address, data.to_vec()));
        Ok(())
    }

    fn read(&mut self, _address: u8, buf: &mut [u8]) -> Result<(), I2cBusError> {
        if let Some(e) = self.fail_with {
            return Err(e);
        }
        self.fill(buf);
        Ok(())
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), I2cBusError> {
        self.write(address, write_data)?;
        self.fill(read_buf);
        Ok(())
    }
}
