//! RP2040-specific HAL for the vfdmux firmware
//!
//! Implements the shared `vfdmux-hal` traits on top of `embassy-rp`:
//!
//! - GPIO outputs for the blank and load lines
//! - Blocking, transmit-only SPI for shifting frames into the MAX6921

#![no_std]

pub mod gpio;
pub mod spi;

pub use gpio::Rp2040Output;
pub use spi::{Rp2040Spi, SpiSetupError};

// Re-export shared traits from vfdmux-hal for convenience
pub use vfdmux_hal::{OutputPin, SpiBus, SpiConfig};
