//! Configuration loading
//!
//! `display.toml` is embedded at build time (and validated by build.rs) and
//! parsed with the no_std parser from vfdmux-core.

use defmt::*;

use vfdmux_core::config::{parse_config, DisplayConfig};

/// Embedded configuration; edit display.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../display.toml");

/// Parse the embedded configuration, falling back to defaults on error
pub fn load() -> DisplayConfig {
    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            error!("display.toml rejected: {:?}, using defaults", e);
            DisplayConfig::default()
        }
    };

    let config = match config.validate() {
        Ok(()) => config,
        Err(e) => {
            error!("Display config invalid: {:?}, using defaults", e);
            DisplayConfig::default()
        }
    };

    let rate = config.refresh;
    info!(
        "Refresh {} Hz ({} us/tick, {} Hz per grid), SPI {} Hz",
        rate.hz(),
        rate.period_us(),
        rate.grid_hz(),
        config.spi_hz
    );
    if !rate.is_flicker_free() {
        warn!("Refresh rate below flicker threshold, tube will flicker");
    }
    info!("Content {:?}, text \"{}\"", config.content, config.text.as_str());

    config
}
