//! Tostada - Toast Shade Selector Panel Firmware
//!
//! Shows the three toast shades on a touchscreen and tells the toaster
//! controller which one is selected whenever the user picks a new one.

#![no_std]
#![no_main]

mod board;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::{self, Spi};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use tostada_core::traits::{DisplayDriver, ShadeLink, TouchSensor};
use tostada_core::{PanelConfig, PanelState, PollOutcome, SendOutcome};
use tostada_display::{GraphicsBackend, Ili9341};
use tostada_drivers::link::I2cShadeLink;
use tostada_drivers::touch::Ft6x36;
use tostada_hal_rp2040::i2c;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Tostada panel starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Display: SPI0, write-only
    let mut spi_config = spi::Config::default();
    spi_config.frequency = board::LCD_SPI_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);

    let mut lcd = Ili9341::new(
        spi,
        Output::new(p.PIN_17, Level::High),
        Output::new(p.PIN_20, Level::Low),
        Output::new(p.PIN_21, Level::High),
    );
    if let Err(e) = lcd.init(&mut Delay) {
        error!("Failed to initialize display: {:?}", e);
    } else {
        info!("LCD initialized");
    }
    let mut display = GraphicsBackend::new(lcd);

    let config = PanelConfig::default();
    if let Err(e) = config.layout.validate() {
        warn!("Panel layout rejected: {:?}", e);
    }
    let mut panel = PanelState::new(config);

    // Boot render; the toaster learns the shade on the first change
    if let Err(e) = panel.render(&mut display) {
        warn!("Initial render failed: {:?}", e);
    }

    // Touch controller: I2C0
    let touch_bus = i2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, &board::TOUCH_I2C);
    let mut touch = Ft6x36::new(touch_bus, board::TOUCH_MAPPING);
    match touch.init() {
        Ok(chip) => info!("Touch controller: {:?}", chip),
        Err(e) => error!("Failed to initialize touch controller: {:?}", e),
    }

    // Toaster controller: I2C1
    let toaster_bus = i2c::new_blocking(p.I2C1, p.PIN_7, p.PIN_6, &board::TOASTER_I2C);
    let mut link = I2cShadeLink::new(toaster_bus);
    info!("Toaster link on address {=u8:#x}", link.address());

    info!("Panel running");
    run_panel(&mut panel, &mut touch, &mut display, &mut link).await
}

/// Poll the panel forever, logging what each iteration did
async fn run_panel<T, D, L>(
    panel: &mut PanelState,
    touch: &mut T,
    display: &mut D,
    link: &mut L,
) where
    T: TouchSensor,
    D: DisplayDriver,
    L: ShadeLink,
{
    loop {
        report(panel.poll_once(touch, display, link));

        // Let the executor run its housekeeping between polls
        embassy_futures::yield_now().await;
    }
}

fn report(outcome: PollOutcome) {
    match outcome {
        PollOutcome::Idle | PollOutcome::AlreadySelected(_) => {}
        PollOutcome::TouchFailed(e) => trace!("Touch read failed: {:?}", e),
        PollOutcome::Miss(point) => trace!("Touch at ({}, {}) missed", point.x, point.y),
        PollOutcome::Changed {
            shade,
            render,
            send,
        } => {
            debug!("Selected shade {}", shade.number());
            if let Err(e) = render {
                warn!("Render failed: {:?}", e);
            }
            match send {
                SendOutcome::Sent(s) => info!("Sent shade index: {}", s.index()),
                SendOutcome::Failed(s, e) => {
                    warn!("Failed to send shade index {}: {:?}", s.index(), e)
                }
                SendOutcome::Unchanged => {}
            }
        }
    }
}
