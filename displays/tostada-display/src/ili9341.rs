//! ILI9341 TFT driver
//!
//! Blocking 4-wire SPI driver for 240x320 ILI9341 panels, run in landscape
//! (320x240) with 16-bit RGB565 pixels. Drawing goes through
//! `embedded-graphics`; solid fills stream straight into a hardware window.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

/// Landscape dimensions
pub const WIDTH: u16 = 320;
pub const HEIGHT: u16 = 240;

/// ILI9341 commands
#[allow(dead_code)]
mod cmd {
    pub const NOP: u8 = 0x00;
    pub const SWRESET: u8 = 0x01;
    pub const SLPOUT: u8 = 0x11;
    pub const DISPOFF: u8 = 0x28;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const PASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const PIXFMT: u8 = 0x3A;
}

/// MADCTL: row/column exchange + BGR order (landscape)
const MADCTL_LANDSCAPE: u8 = 0x20 | 0x08;

/// PIXFMT: 16 bits per pixel on both interfaces
const PIXFMT_RGB565: u8 = 0x55;

/// Pixels per SPI write when streaming a fill
const FILL_CHUNK: usize = 32;

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ili9341Error {
    /// SPI transfer failed
    Spi,
    /// Chip select, data/command or reset pin failed
    Pin,
}

/// ILI9341 driver
pub struct Ili9341<SPI, CS, DC, RST> {
    spi: SPI,
    cs: CS,
    dc: DC,
    rst: RST,
}

impl<SPI, CS, DC, RST> Ili9341<SPI, CS, DC, RST>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new driver (call `init` before drawing)
    pub fn new(spi: SPI, cs: CS, dc: DC, rst: RST) -> Self {
        Self { spi, cs, dc, rst }
    }

    /// Reset and configure the controller
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), Ili9341Error> {
        self.cs.set_high().map_err(|_| Ili9341Error::Pin)?;

        // Hardware reset
        self.rst.set_low().map_err(|_| Ili9341Error::Pin)?;
        delay.delay_ms(10);
        self.rst.set_high().map_err(|_| Ili9341Error::Pin)?;
        delay.delay_ms(120);

        self.command(cmd::SWRESET, &[])?;
        delay.delay_ms(150);
        self.command(cmd::SLPOUT, &[])?;
        delay.delay_ms(120);

        self.command(cmd::PIXFMT, &[PIXFMT_RGB565])?;
        self.command(cmd::MADCTL, &[MADCTL_LANDSCAPE])?;

        self.command(cmd::DISPON, &[])?;
        delay.delay_ms(20);

        Ok(())
    }

    /// Turn the panel output on or off
    pub fn set_display_on(&mut self, on: bool) -> Result<(), Ili9341Error> {
        if on {
            self.command(cmd::DISPON, &[])
        } else {
            self.command(cmd::DISPOFF, &[])
        }
    }

    /// Stream one color into every pixel of `area`
    ///
    /// `area` must already be clipped to the screen.
    fn fill_window(&mut self, area: &Rectangle, color: Rgb565) -> Result<(), Ili9341Error> {
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };
        self.set_window(
            area.top_left.x as u16,
            area.top_left.y as u16,
            bottom_right.x as u16,
            bottom_right.y as u16,
        )?;

        let [hi, lo] = color.into_storage().to_be_bytes();
        let mut chunk = [0u8; FILL_CHUNK * 2];
        for px in chunk.chunks_exact_mut(2) {
            px[0] = hi;
            px[1] = lo;
        }

        let mut remaining = area.size.width as usize * area.size.height as usize;
        self.cs.set_low().map_err(|_| Ili9341Error::Pin)?;
        let result = self.write_ram(&chunk, &mut remaining);
        self.cs.set_high().map_err(|_| Ili9341Error::Pin)?;
        result
    }

    fn write_ram(&mut self, chunk: &[u8], remaining: &mut usize) -> Result<(), Ili9341Error> {
        self.dc.set_low().map_err(|_| Ili9341Error::Pin)?;
        self.spi.write(&[cmd::RAMWR]).map_err(|_| Ili9341Error::Spi)?;
        self.dc.set_high().map_err(|_| Ili9341Error::Pin)?;

        while *remaining > 0 {
            let n = (*remaining).min(FILL_CHUNK);
            self.spi
                .write(&chunk[..n * 2])
                .map_err(|_| Ili9341Error::Spi)?;
            *remaining -= n;
        }
        self.spi.flush().map_err(|_| Ili9341Error::Spi)
    }

    /// Set the inclusive column/page window for the next RAM write
    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), Ili9341Error> {
        let [x0h, x0l] = x0.to_be_bytes();
        let [x1h, x1l] = x1.to_be_bytes();
        let [y0h, y0l] = y0.to_be_bytes();
        let [y1h, y1l] = y1.to_be_bytes();
        self.command(cmd::CASET, &[x0h, x0l, x1h, x1l])?;
        self.command(cmd::PASET, &[y0h, y0l, y1h, y1l])
    }

    /// Send one command with its parameters
    fn command(&mut self, command: u8, params: &[u8]) -> Result<(), Ili9341Error> {
        self.cs.set_low().map_err(|_| Ili9341Error::Pin)?;
        let result = self.command_inner(command, params);
        self.cs.set_high().map_err(|_| Ili9341Error::Pin)?;
        result
    }

    fn command_inner(&mut self, command: u8, params: &[u8]) -> Result<(), Ili9341Error> {
        self.dc.set_low().map_err(|_| Ili9341Error::Pin)?;
        self.spi.write(&[command]).map_err(|_| Ili9341Error::Spi)?;
        if !params.is_empty() {
            self.dc.set_high().map_err(|_| Ili9341Error::Pin)?;
            self.spi.write(params).map_err(|_| Ili9341Error::Spi)?;
        }
        self.spi.flush().map_err(|_| Ili9341Error::Spi)
    }
}

impl<SPI, CS, DC, RST> OriginDimensions for Ili9341<SPI, CS, DC, RST> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl<SPI, CS, DC, RST> DrawTarget for Ili9341<SPI, CS, DC, RST>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    type Color = Rgb565;
    type Error = Ili9341Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if bounds.contains(point) {
                self.fill_window(&Rectangle::new(point, Size::new(1, 1)), color)?;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let clipped = area.intersection(&self.bounding_box());
        if clipped.is_zero_sized() {
            return Ok(());
        }
        self.fill_window(&clipped, color)
    }
}
