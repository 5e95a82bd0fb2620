//! Grid selectors
//!
//! The IV-18 has eight digit grids plus a small sign grid at the left end
//! that can show a minus or a degree mark. The MAX6921 outputs wired to the
//! grids land on bits 16..=23 (digits) and bit 8 (sign) of a frame.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every bit a grid selector may occupy
pub const GRID_MASK: u32 = 0x00FF_0100;

/// One physical digit position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Grid {
    Grid0,
    Grid1,
    Grid2,
    Grid3,
    Grid4,
    Grid5,
    Grid6,
    Grid7,
    /// Sign / degree position left of Grid7
    Sign,
}

impl Grid {
    /// Raw selector bits for this grid
    pub const fn bits(self) -> u32 {
        match self {
            Grid::Grid0 => 0x0001_0000,
            Grid::Grid1 => 0x0002_0000,
            Grid::Grid2 => 0x0004_0000,
            Grid::Grid3 => 0x0008_0000,
            Grid::Grid4 => 0x0010_0000,
            Grid::Grid5 => 0x0020_0000,
            Grid::Grid6 => 0x0040_0000,
            Grid::Grid7 => 0x0080_0000,
            Grid::Sign => 0x0000_0100,
        }
    }

    pub const fn is_sign(self) -> bool {
        matches!(self, Grid::Sign)
    }
}
