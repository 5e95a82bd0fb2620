//! vfdmux - IV-18 multiplexing firmware
//!
//! Drives an IV-18 vacuum-fluorescent tube through a MAX6921 from an
//! RP2040. The refresh task lights one grid per tick while the content task
//! rewrites the shared display buffer.
//!
//! Pin assignments:
//! - SPI0 CLK: GPIO18, DIN: GPIO19
//! - LOAD: GPIO20, BLANK: GPIO21
//! - Shutdown button: GPIO15 (active low)

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use vfdmux_core::DisplayBuffer;
use vfdmux_drivers::Max6921;
use vfdmux_hal::{Level, Polarity, SpiConfig};
use vfdmux_hal_rp2040::{Rp2040Output, Rp2040Spi};

use crate::channels::SHUTDOWN;

mod channels;
mod config;
mod tasks;

/// Debounce time for the shutdown button
const DEBOUNCE_MS: u64 = 20;

/// Text shown on the tube, written by the content task
static DISPLAY: DisplayBuffer = DisplayBuffer::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("vfdmux firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();

    // Blank from the first instant the pin is driven
    let blank_polarity = if config.blank_inverted {
        Polarity::ActiveLow
    } else {
        Polarity::ActiveHigh
    };
    let blank = Rp2040Output::new(p.PIN_21, blank_polarity.level(true));
    let load = Rp2040Output::new(p.PIN_20, Level::High);

    let spi_config = SpiConfig::max6921(config.spi_hz);
    let bus = match Rp2040Spi::new_tx_only(p.SPI0, p.PIN_18, p.PIN_19, &spi_config) {
        Ok(bus) => bus,
        // Halt with BLANK still driven rather than return and float it
        Err(e) => defmt::panic!("SPI setup failed: {:?}", e),
    };

    let driver = Max6921::new(bus, blank, load, blank_polarity);
    info!("MAX6921 initialized");

    let shutdown_button = Input::new(p.PIN_15, Pull::Up);

    spawner
        .spawn(tasks::refresh_task(driver, &DISPLAY, config.refresh))
        .unwrap();
    spawner.spawn(tasks::content_task(&DISPLAY, config)).unwrap();

    info!("All tasks spawned, firmware running");

    wait_for_press(shutdown_button).await;
    info!("Shutdown requested");
    SHUTDOWN.signal(());
}

/// Wait for a debounced press of an active-low button
async fn wait_for_press(mut button: Input<'static>) {
    loop {
        button.wait_for_falling_edge().await;
        Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;
        if button.is_low() {
            return;
        }
    }
}
