//! Transmit-only SPI
//!
//! The MAX6921 only needs CLK and DIN, so the bus is created with
//! `new_blocking_txonly`. Writes go through the `embedded-hal` bus trait,
//! which lets us `flush` before returning: the frame must be fully shifted
//! in before the caller pulses the latch or releases blanking.

use embassy_rp::spi::{self, Blocking, ClkPin, Instance, MosiPin, Spi};
use embassy_rp::Peri;
use vfdmux_hal::spi::{BitOrder, SpiBus, SpiConfig};

/// SPI setup errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiSetupError {
    /// The RP2040 SPI block only shifts MSB first
    UnsupportedBitOrder,
}

/// Translate a hal configuration into an embassy-rp one
pub fn to_embassy_config(config: &SpiConfig) -> Result<spi::Config, SpiSetupError> {
    if config.bit_order != BitOrder::MsbFirst {
        return Err(SpiSetupError::UnsupportedBitOrder);
    }

    let mut cfg = spi::Config::default();
    cfg.frequency = config.frequency;
    cfg.polarity = if config.mode.idle_high() {
        spi::Polarity::IdleHigh
    } else {
        spi::Polarity::IdleLow
    };
    cfg.phase = if config.mode.capture_on_second() {
        spi::Phase::CaptureOnSecondTransition
    } else {
        spi::Phase::CaptureOnFirstTransition
    };
    Ok(cfg)
}

/// Blocking, transmit-only bus implementing [`SpiBus`]
pub struct Rp2040Spi<'d, T: Instance> {
    spi: Spi<'d, T, Blocking>,
}

impl<'d, T: Instance> Rp2040Spi<'d, T> {
    /// Create the bus for the tube driver
    pub fn new_tx_only(
        inner: Peri<'d, T>,
        clk: Peri<'d, impl ClkPin<T> + 'd>,
        mosi: Peri<'d, impl MosiPin<T> + 'd>,
        config: &SpiConfig,
    ) -> Result<Self, SpiSetupError> {
        let cfg = to_embassy_config(config)?;
        Ok(Self {
            spi: Spi::new_blocking_txonly(inner, clk, mosi, cfg),
        })
    }
}

impl<T: Instance> SpiBus for Rp2040Spi<'_, T> {
    type Error = spi::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        embedded_hal::spi::SpiBus::write(&mut self.spi, data)?;
        embedded_hal::spi::SpiBus::flush(&mut self.spi)
    }
}
