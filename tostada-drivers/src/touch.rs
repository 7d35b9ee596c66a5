//! FT6x36 capacitive touch controller (I2C)
//!
//! Covers the FocalTech FT6206, FT6236 and FT6336U, which share a register
//! map. One burst read of registers 0x02..=0x0E returns the contact count
//! followed by two 6-byte point records:
//!
//! ```text
//! ┌───────────┬──────────────────────────────┬──────────────────────────────┐
//! │ TD_STATUS │ P1: XH XL YH YL WEIGHT MISC  │ P2: XH XL YH YL WEIGHT MISC  │
//! │ 1B        │ 6B                           │ 6B                           │
//! └───────────┴──────────────────────────────┴──────────────────────────────┘
//! ```
//!
//! XH/YH carry the top 4 coordinate bits; the event flag sits in XH[7:6]
//! and the touch id in YH[7:4].

use heapless::Vec;
use tostada_core::traits::{TouchError, TouchSensor};
use tostada_core::Point;
use tostada_hal::I2cBus;

/// Default 7-bit address of the FT6x36 family
pub const FT6X36_ADDR: u8 = 0x38;

/// Register addresses
pub mod reg {
    /// Touch status (number of contacts in the low nibble)
    pub const TD_STATUS: u8 = 0x02;
    /// Touch detection threshold
    pub const TH_GROUP: u8 = 0x80;
    /// Chip identifier
    pub const CHIP_ID: u8 = 0xA3;
    /// FocalTech vendor identifier
    pub const VENDOR_ID: u8 = 0xA8;
}

/// Bytes in one status + two-point burst
const REPORT_LEN: usize = 13;

/// Maximum simultaneous contacts the controller tracks
const MAX_POINTS: usize = 2;

/// FocalTech vendor id
const FOCALTECH_VENDOR: u8 = 0x11;

/// Default touch threshold (lower is more sensitive)
const DEFAULT_THRESHOLD: u8 = 40;

/// Detected controller variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Chip {
    Ft6206,
    Ft6236,
    Ft6336u,
    /// FocalTech part with an unrecognised chip id
    Unknown(u8),
}

impl Chip {
    fn from_id(id: u8) -> Self {
        match id {
            0x06 => Chip::Ft6206,
            0x36 => Chip::Ft6236,
            0x64 => Chip::Ft6336u,
            other => Chip::Unknown(other),
        }
    }
}

/// One contact as reported by the controller (panel coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawPoint {
    pub x: u16,
    pub y: u16,
    pub id: u8,
    pub event: u8,
}

/// Parsed status burst
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchReport {
    /// Contact count as reported (may exceed what was parsed)
    pub count: u8,
    pub points: Vec<RawPoint, MAX_POINTS>,
}

/// Parse a status burst
///
/// Returns `Malformed` if the controller reports more contacts than it can
/// track, which happens while it is still booting.
pub fn parse_report(raw: &[u8; REPORT_LEN]) -> Result<TouchReport, TouchError> {
    let count = raw[0] & 0x0f;
    if count as usize > MAX_POINTS {
        return Err(TouchError::Malformed);
    }

    let mut points = Vec::new();
    for chunk in raw[1..].chunks_exact(6).take(count as usize) {
        let _ = points.push(parse_point(chunk));
    }

    Ok(TouchReport { count, points })
}

fn parse_point(buf: &[u8]) -> RawPoint {
    // buf = [XH, XL, YH, YL, WEIGHT, MISC]
    let x = (((buf[0] & 0x0f) as u16) << 8) | buf[1] as u16;
    let y = (((buf[2] & 0x0f) as u16) << 8) | buf[3] as u16;
    RawPoint {
        x,
        y,
        id: (buf[2] >> 4) & 0x0f,
        event: (buf[0] >> 6) & 0x03,
    }
}

/// Mapping from panel coordinates to display pixels
///
/// These values depend on how the glass is mounted relative to the LCD and
/// must be checked on hardware by tapping the screen corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchMapping {
    /// Largest raw X the panel reports
    pub raw_max_x: i32,
    /// Largest raw Y the panel reports
    pub raw_max_y: i32,
    /// Exchange axes before inverting
    pub swap_xy: bool,
    pub invert_x: bool,
    pub invert_y: bool,
}

impl TouchMapping {
    /// Raw coordinates pass through unchanged (240x320 portrait)
    pub const PORTRAIT: Self = Self {
        raw_max_x: 239,
        raw_max_y: 319,
        swap_xy: false,
        invert_x: false,
        invert_y: false,
    };

    /// Portrait glass on a 320x240 landscape display
    pub const LANDSCAPE: Self = Self {
        raw_max_x: 239,
        raw_max_y: 319,
        swap_xy: true,
        invert_x: false,
        invert_y: true,
    };

    /// Map a raw point into display space
    ///
    /// No clamping: readings outside the panel stay outside the display and
    /// simply miss every target.
    pub fn apply(&self, raw: RawPoint) -> Point {
        let mut x = raw.x as i32;
        let mut y = raw.y as i32;
        let mut max_x = self.raw_max_x;
        let mut max_y = self.raw_max_y;

        if self.swap_xy {
            core::mem::swap(&mut x, &mut y);
            core::mem::swap(&mut max_x, &mut max_y);
        }
        if self.invert_x {
            x = max_x - x;
        }
        if self.invert_y {
            y = max_y - y;
        }

        Point::new(x, y)
    }
}

impl Default for TouchMapping {
    fn default() -> Self {
        Self::LANDSCAPE
    }
}

/// FT6x36 driver
pub struct Ft6x36<B> {
    bus: B,
    mapping: TouchMapping,
    /// Report from the last `contact_count` call
    last: Option<TouchReport>,
}

impl<B: I2cBus> Ft6x36<B> {
    /// Create a new driver
    pub fn new(bus: B, mapping: TouchMapping) -> Self {
        Self {
            bus,
            mapping,
            last: None,
        }
    }

    /// Identify the controller and program the touch threshold
    pub fn init(&mut self) -> Result<Chip, TouchError> {
        let vendor = self.read_register(reg::VENDOR_ID)?;
        if vendor != FOCALTECH_VENDOR {
            return Err(TouchError::Malformed);
        }

        let chip = Chip::from_id(self.read_register(reg::CHIP_ID)?);
        self.bus
            .write(FT6X36_ADDR, &[reg::TH_GROUP, DEFAULT_THRESHOLD])
            .map_err(|_| TouchError::Bus)?;

        Ok(chip)
    }

    /// Read and parse the status burst
    pub fn read_report(&mut self) -> Result<TouchReport, TouchError> {
        let mut raw = [0u8; REPORT_LEN];
        self.bus
            .write_read(FT6X36_ADDR, &[reg::TD_STATUS], &mut raw)
            .map_err(|_| TouchError::Bus)?;
        parse_report(&raw)
    }

    /// Release the underlying bus
    pub fn release(self) -> B {
        self.bus
    }

    fn read_register(&mut self, register: u8) -> Result<u8, TouchError> {
        let mut buf = [0u8; 1];
        self.bus
            .write_read(FT6X36_ADDR, &[register], &mut buf)
            .map_err(|_| TouchError::Bus)?;
        Ok(buf[0])
    }
}

impl<B: I2cBus> TouchSensor for Ft6x36<B> {
    fn contact_count(&mut self) -> Result<u8, TouchError> {
        self.last = None;
        let report = self.read_report()?;
        let count = report.count;
        self.last = Some(report);
        Ok(count)
    }

    fn first_contact(&mut self) -> Result<Option<Point>, TouchError> {
        let report = match self.last.take() {
            Some(report) => report,
            None => self.read_report()?,
        };
        Ok(report.points.first().map(|p| self.mapping.apply(*p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_bus::MockBus;
    use std::vec;
    use tostada_hal::I2cBusError;

    fn report(count: u8, p1: (u16, u16), p2: (u16, u16)) -> [u8; REPORT_LEN] {
        let mut raw = [0u8; REPORT_LEN];
        raw[0] = count;
        raw[1] = 0x80 | (p1.0 >> 8) as u8; // event = contact
        raw[2] = p1.0 as u8;
        raw[3] = (p1.1 >> 8) as u8;
        raw[4] = p1.1 as u8;
        raw[7] = (p2.0 >> 8) as u8;
        raw[8] = p2.0 as u8;
        raw[9] = 0x10 | (p2.1 >> 8) as u8; // id = 1
        raw[10] = p2.1 as u8;
        raw
    }

    #[test]
    fn test_parse_no_contact() {
        let parsed = parse_report(&[0u8; REPORT_LEN]).unwrap();
        assert_eq!(parsed.count, 0);
        assert!(parsed.points.is_empty());
    }

    #[test]
    fn test_parse_twelve_bit_coordinates() {
        let parsed = parse_report(&report(2, (0x123, 0x0FE), (239, 319))).unwrap();
        assert_eq!(parsed.count, 2);
        assert_eq!(
            parsed.points[0],
            RawPoint {
                x: 0x123,
                y: 0x0FE,
                id: 0,
                event: 2
            }
        );
        assert_eq!(parsed.points[1].x, 239);
        assert_eq!(parsed.points[1].y, 319);
        assert_eq!(parsed.points[1].id, 1);
    }

    #[test]
    fn test_parse_ignores_status_high_nibble() {
        let mut raw = report(1, (10, 20), (0, 0));
        raw[0] |= 0xA0;
        assert_eq!(parse_report(&raw).unwrap().count, 1);
    }

    #[test]
    fn test_parse_rejects_impossible_count() {
        let raw = report(0x0F, (0, 0), (0, 0));
        assert_eq!(parse_report(&raw), Err(TouchError::Malformed));
    }

    #[test]
    fn test_landscape_mapping() {
        let raw = RawPoint {
            x: 40,
            y: 300,
            id: 0,
            event: 0,
        };
        assert_eq!(TouchMapping::LANDSCAPE.apply(raw), Point::new(300, 199));
        assert_eq!(TouchMapping::PORTRAIT.apply(raw), Point::new(40, 300));
    }

    #[test]
    fn test_sensor_reads_one_burst_per_poll() {
        let bus = MockBus::responding(&report(1, (124, 115), (0, 0)));
        let mut touch = Ft6x36::new(bus, TouchMapping::LANDSCAPE);

        assert_eq!(touch.contact_count(), Ok(1));
        assert_eq!(touch.first_contact(), Ok(Some(Point::new(115, 115))));

        let bus = touch.release();
        assert_eq!(bus.writes, vec![(FT6X36_ADDR, vec![reg::TD_STATUS])]);
    }

    #[test]
    fn test_sensor_bus_failure() {
        let mut bus = MockBus::new();
        bus.fail_with = Some(I2cBusError::Nack);
        let mut touch = Ft6x36::new(bus, TouchMapping::default());

        assert_eq!(touch.contact_count(), Err(TouchError::Bus));
    }

    #[test]
    fn test_init_programs_threshold() {
        // Every register read returns the FocalTech vendor id
        let bus = MockBus::responding(&[FOCALTECH_VENDOR]);
        let mut touch = Ft6x36::new(bus, TouchMapping::default());

        assert_eq!(touch.init(), Ok(Chip::Unknown(FOCALTECH_VENDOR)));
        let writes = touch.release().writes;
        assert_eq!(
            writes.last(),
            Some(&(FT6X36_ADDR, vec![reg::TH_GROUP, DEFAULT_THRESHOLD]))
        );
    }

    #[test]
    fn test_init_rejects_foreign_vendor() {
        let bus = MockBus::responding(&[0x00]);
        let mut touch = Ft6x36::new(bus, TouchMapping::default());
        assert_eq!(touch.init(), Err(TouchError::Malformed));
    }
}
