//! Configuration type definitions

use heapless::String;

use crate::buffer::DISPLAY_WIDTH;
use crate::scheduler::RefreshRate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bits shifted per frame
const FRAME_BITS: u32 = 24;

/// Fastest serial clock the driver chip accepts
pub const MAX_SPI_HZ: u32 = 10_000_000;

/// Text shown when nothing else has been written
pub const DEFAULT_TEXT: &str = "*DEADBEEF";

/// What the content task writes into the display buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContentMode {
    /// The configured text, once
    #[default]
    Static,
    /// Time since boot as `" HH MM SS"`
    Uptime,
    /// A signed counter stepped on every update
    Counter,
}

impl ContentMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "static" => Some(Self::Static),
            "uptime" => Some(Self::Uptime),
            "counter" => Some(Self::Counter),
            _ => None,
        }
    }
}

/// Errors found when checking a parsed configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Serial clock cannot shift one frame per refresh period
    SpiTooSlow,
    /// Serial clock above what the driver chip accepts
    SpiTooFast,
    /// Content update interval of zero
    ZeroUpdateInterval,
}

/// Complete display configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Scheduler tick rate
    pub refresh: RefreshRate,
    /// Serial clock to the driver chip
    pub spi_hz: u32,
    /// BLANK pin is active low on this board
    pub blank_inverted: bool,
    pub content: ContentMode,
    /// Text written at startup and in static mode
    pub text: String<DISPLAY_WIDTH>,
    /// Interval between content updates
    pub update_ms: u32,
}

// The default text always fits, so the conversion below cannot fail
const _: () = assert!(DEFAULT_TEXT.len() <= DISPLAY_WIDTH);

impl Default for DisplayConfig {
    fn default() -> Self {
        let text = String::try_from(DEFAULT_TEXT).unwrap_or_default();

        Self {
            refresh: RefreshRate::default(),
            spi_hz: 800_000,
            blank_inverted: false,
            content: ContentMode::Static,
            text,
            update_ms: 1_000,
        }
    }
}

impl DisplayConfig {
    /// Check that the settings can work together
    ///
    /// A refresh rate below the flicker threshold is allowed; query
    /// [`RefreshRate::is_flicker_free`] to report it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spi_hz > MAX_SPI_HZ {
            return Err(ConfigError::SpiTooFast);
        }
        if self.spi_hz / FRAME_BITS < self.refresh.hz() {
            return Err(ConfigError::SpiTooSlow);
        }
        if self.update_ms == 0 {
            return Err(ConfigError::ZeroUpdateInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_board() {
        let config = DisplayConfig::default();
        assert_eq!(config.refresh.hz(), 500);
        assert_eq!(config.spi_hz, 800_000);
        assert_eq!(config.text.as_str(), "*DEADBEEF");
        assert_eq!(config.content, ContentMode::Static);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_default_text_is_not_truncated() {
        let config = DisplayConfig::default();
        assert_eq!(config.text.len(), DEFAULT_TEXT.len());
        assert!(String::<DISPLAY_WIDTH>::try_from(DEFAULT_TEXT).is_ok());
    }

    #[test]
    fn test_spi_must_keep_up_with_refresh() {
        let mut config = DisplayConfig::default();
        config.spi_hz = 24 * 500;
        assert_eq!(config.validate(), Ok(()));

        config.spi_hz = 24 * 500 - 1;
        assert_eq!(config.validate(), Err(ConfigError::SpiTooSlow));
    }

    #[test]
    fn test_spi_upper_limit() {
        let mut config = DisplayConfig::default();
        config.spi_hz = MAX_SPI_HZ + 1;
        assert_eq!(config.validate(), Err(ConfigError::SpiTooFast));
    }

    #[test]
    fn test_content_mode_names() {
        assert_eq!(ContentMode::from_name("uptime"), Some(ContentMode::Uptime));
        assert_eq!(ContentMode::from_name("Counter"), None);
    }
}
