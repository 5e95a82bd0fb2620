//! Refresh rate arithmetic

use super::refresh::CYCLE_LEN;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-grid rate above which flicker is not perceived
pub const PERSISTENCE_HZ: u32 = 50;

/// Lowest tick rate that refreshes every grid at [`PERSISTENCE_HZ`]
pub const MIN_FLICKER_FREE_HZ: u32 = PERSISTENCE_HZ * CYCLE_LEN as u32;

/// Tick rate of the refresh scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RefreshRate {
    hz: u32,
}

impl Default for RefreshRate {
    fn default() -> Self {
        Self { hz: 500 }
    }
}

impl RefreshRate {
    /// A rate of `hz` ticks per second, `None` for zero or above 1 MHz
    pub const fn new(hz: u32) -> Option<Self> {
        if hz == 0 || hz > 1_000_000 {
            None
        } else {
            Some(Self { hz })
        }
    }

    pub const fn hz(self) -> u32 {
        self.hz
    }

    /// Time between ticks
    pub const fn period_us(self) -> u32 {
        1_000_000 / self.hz
    }

    /// How often each grid is lit
    pub const fn grid_hz(self) -> u32 {
        self.hz / CYCLE_LEN as u32
    }

    /// Time for one pass over every grid
    pub const fn cycle_us(self) -> u32 {
        self.period_us() * CYCLE_LEN as u32
    }

    pub const fn is_flicker_free(self) -> bool {
        self.hz >= MIN_FLICKER_FREE_HZ
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rate() {
        let rate = RefreshRate::default();
        assert_eq!(rate.hz(), 500);
        assert_eq!(rate.period_us(), 2_000);
        assert_eq!(rate.cycle_us(), 18_000);
        assert_eq!(rate.grid_hz(), 55);
        assert!(rate.is_flicker_free());
    }

    #[test]
    fn test_threshold() {
        assert_eq!(MIN_FLICKER_FREE_HZ, 450);
        assert!(RefreshRate::new(450).unwrap().is_flicker_free());
        assert!(!RefreshRate::new(449).unwrap().is_flicker_free());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(RefreshRate::new(0), None);
        assert_eq!(RefreshRate::new(1_000_001), None);
        assert!(RefreshRate::new(1_000_000).is_some());
    }
}
