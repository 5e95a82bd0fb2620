//! GPIO outputs
//!
//! `embassy_rp::gpio::Output` already does the register work; this module
//! only bridges it to [`vfdmux_hal::OutputPin`].

use embassy_rp::gpio::{self, Output, Pin};
use embassy_rp::Peri;
use vfdmux_hal::{Level, OutputPin};

/// Convert a hal level into the embassy equivalent
pub fn to_embassy_level(level: Level) -> gpio::Level {
    match level {
        Level::High => gpio::Level::High,
        Level::Low => gpio::Level::Low,
    }
}

/// Push-pull output implementing [`OutputPin`]
pub struct Rp2040Output<'d> {
    pin: Output<'d>,
}

impl<'d> Rp2040Output<'d> {
    /// Configure `pin` as an output starting at `initial`
    ///
    /// The initial level is applied before the output driver is enabled, so
    /// the blank line never glitches to "lit" during bring-up.
    pub fn new(pin: Peri<'d, impl Pin>, initial: Level) -> Self {
        Self {
            pin: Output::new(pin, to_embassy_level(initial)),
        }
    }
}

impl OutputPin for Rp2040Output<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
