//! Reference board: Raspberry Pi Pico + 2.8" ILI9341 / FT6206 touch shield
//!
//! | Signal         | GPIO | Peripheral |
//! |----------------|------|------------|
//! | LCD SCK        | 18   | SPI0       |
//! | LCD MOSI       | 19   | SPI0       |
//! | LCD CS         | 17   | GPIO       |
//! | LCD DC         | 20   | GPIO       |
//! | LCD RST        | 21   | GPIO       |
//! | Touch SDA      | 4    | I2C0       |
//! | Touch SCL      | 5    | I2C0       |
//! | Toaster SDA    | 6    | I2C1       |
//! | Toaster SCL    | 7    | I2C1       |
//!
//! Pin objects are taken in `main`; this module holds the bus settings that
//! go with them.

use tostada_drivers::touch::TouchMapping;
use tostada_hal_rp2040::I2cConfig;

/// LCD SPI clock (ILI9341 write cycle allows up to ~40 MHz)
pub const LCD_SPI_HZ: u32 = 32_000_000;

/// Touch controller bus
pub const TOUCH_I2C: I2cConfig = I2cConfig::FAST;

/// Toaster controller bus
pub const TOASTER_I2C: I2cConfig = I2cConfig::STANDARD;

/// Touch glass is mounted portrait under a landscape LCD
pub const TOUCH_MAPPING: TouchMapping = TouchMapping::LANDSCAPE;
