//! Segment masks
//!
//! A [`SegmentMask`] is a set of lit segments on one grid. The decimal point
//! and the degree mark on the sign grid are the same MAX6921 output, as are
//! segment G and the sign grid's minus bar.

use core::ops::{BitAnd, BitOr, BitOrAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every bit a segment may occupy
pub const SEGMENT_MASK: u32 = 0x0000_FE01;

/// Set of lit segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentMask(u32);

impl SegmentMask {
    /// Nothing lit
    pub const EMPTY: Self = Self(0);
    pub const A: Self = Self(0x0000_0200);
    pub const B: Self = Self(0x0000_0400);
    pub const C: Self = Self(0x0000_0800);
    pub const D: Self = Self(0x0000_1000);
    pub const E: Self = Self(0x0000_2000);
    pub const F: Self = Self(0x0000_4000);
    pub const G: Self = Self(0x0000_8000);
    /// Decimal point
    pub const DOT: Self = Self(0x0000_0001);
    /// Degree mark, shares the DOT output
    pub const DEGREE: Self = Self::DOT;
    /// Minus bar, shares the G output
    pub const MINUS: Self = Self::G;
    /// Every segment including the dot
    pub const ALL: Self = Self(SEGMENT_MASK);

    /// Raw segment bits
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Mask from raw bits, `None` if any bit is outside [`SEGMENT_MASK`]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        if bits & !SEGMENT_MASK == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// Mask from raw bits, dropping anything outside [`SEGMENT_MASK`]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & SEGMENT_MASK)
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of lit segments
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }
}

impl BitOr for SegmentMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for SegmentMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for SegmentMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}
