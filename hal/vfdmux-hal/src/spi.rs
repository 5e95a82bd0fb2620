//! Write-only SPI bus abstraction
//!
//! The MAX6921 is a shift register with no data output, so only the write
//! half of a bus is modelled. `write` must not return until the last bit
//! has been clocked out: callers toggle control lines right after it.

/// Write-only SPI master
pub trait SpiBus {
    /// Error type for bus operations
    type Error;

    /// Clock out `data`, first byte first, and wait until the bus is idle
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

/// SPI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock mode
    pub mode: SpiMode,
    /// Bit order within each byte
    pub bit_order: BitOrder,
}

impl SpiConfig {
    /// Configuration for the MAX6921 at the given clock rate
    pub const fn max6921(frequency: u32) -> Self {
        Self {
            frequency,
            mode: SpiMode::Mode0,
            bit_order: BitOrder::MsbFirst,
        }
    }
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self::max6921(800_000)
    }
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiMode {
    /// CPOL=0, CPHA=0
    Mode0,
    /// CPOL=0, CPHA=1
    Mode1,
    /// CPOL=1, CPHA=0
    Mode2,
    /// CPOL=1, CPHA=1
    Mode3,
}

impl SpiMode {
    /// Clock idles high
    pub const fn idle_high(self) -> bool {
        matches!(self, SpiMode::Mode2 | SpiMode::Mode3)
    }

    /// Data captured on the second clock transition
    pub const fn capture_on_second(self) -> bool {
        matches!(self, SpiMode::Mode1 | SpiMode::Mode3)
    }
}

/// Bit order on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    MsbFirst,
    LsbFirst,
}
