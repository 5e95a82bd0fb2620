//! MAX6921 VFD driver
//!
//! The MAX6921 is a 20-output high-voltage shift register. Data is clocked
//! in MSB first; while LOAD is high the latches are transparent, so outputs
//! follow the shift register as bits arrive. BLANK forces every output low
//! regardless of the latches.
//!
//! With LOAD held high, each frame is written as:
//!
//! ```text
//! BLANK  ____/‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾\____
//! DIN    ______<  24 bits, MSB  >______
//! OUT    =old=|      dark        |=new=
//! ```
//!
//! so a half-shifted pattern is never visible.

use vfdmux_core::{Transport, TransportError};
use vfdmux_hal::{OutputPin, Polarity, SpiBus};
use vfdmux_protocol::Frame;

/// MAX6921 on a write-only SPI bus with BLANK and LOAD lines
pub struct Max6921<S, B, L> {
    spi: S,
    blank: B,
    load: L,
    blank_polarity: Polarity,
    blanked: bool,
}

impl<S, B, L> Max6921<S, B, L>
where
    S: SpiBus,
    B: OutputPin,
    L: OutputPin,
{
    /// Take over the bus and pins
    ///
    /// The tube is blanked and the latches made transparent. Call
    /// [`enable`](Self::enable) once refreshing starts.
    pub fn new(spi: S, blank: B, load: L, blank_polarity: Polarity) -> Self {
        let mut driver = Self {
            spi,
            blank,
            load,
            blank_polarity,
            blanked: false,
        };
        driver.blank();
        driver.set_frozen(false);
        driver
    }

    /// Let the latched pattern show
    pub fn enable(&mut self) {
        self.unblank();
    }

    /// Whether BLANK is currently asserted
    pub fn is_blanked(&self) -> bool {
        self.blanked
    }

    /// Hold the outputs at their current pattern while shifting
    ///
    /// LOAD low freezes the latches; high makes them follow the shift
    /// register.
    pub fn set_frozen(&mut self, frozen: bool) {
        if frozen {
            self.load.set_low();
        } else {
            self.load.set_high();
        }
    }

    /// Blank the tube and hand back the bus and pins
    pub fn release(mut self) -> (S, B, L) {
        self.blank();
        (self.spi, self.blank, self.load)
    }

    fn drive_blank(&mut self, asserted: bool) {
        self.blank.set_level(self.blank_polarity.level(asserted));
        self.blanked = asserted;
    }
}

impl<S, B, L> Transport for Max6921<S, B, L>
where
    S: SpiBus,
    B: OutputPin,
    L: OutputPin,
{
    fn blank(&mut self) {
        self.drive_blank(true);
    }

    fn unblank(&mut self) {
        self.drive_blank(false);
    }

    fn send(&mut self, frame: Frame) -> Result<(), TransportError> {
        self.blank();
        let result = self.spi.write(&frame.to_bytes());
        // Unblank even on failure; the next tick overwrites the register
        self.unblank();
        result.map_err(|_| TransportError::Bus)
    }
}
