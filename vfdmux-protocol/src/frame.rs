//! Frame encoding for the MAX6921.
//!
//! A frame is 24 bits: one grid selector OR'd with a segment mask. It is
//! shifted out as three bytes, most significant byte first, so the first bit
//! on the wire is OUT23 of the driver chip.

use crate::grid::Grid;
use crate::segment::SegmentMask;

/// Bytes per frame on the wire
pub const FRAME_BYTES: usize = 3;

/// Bits a frame may occupy
pub const FRAME_MASK: u32 = 0x00FF_FFFF;

/// One multiplexing slice: a grid and the segments lit on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    grid: Grid,
    segments: SegmentMask,
}

impl Frame {
    /// Create a frame lighting `segments` on `grid`
    pub const fn new(grid: Grid, segments: SegmentMask) -> Self {
        Self { grid, segments }
    }

    /// A frame that selects `grid` with nothing lit
    pub const fn dark(grid: Grid) -> Self {
        Self::new(grid, SegmentMask::EMPTY)
    }

    pub const fn grid(self) -> Grid {
        self.grid
    }

    pub const fn segments(self) -> SegmentMask {
        self.segments
    }

    /// The 24-bit wire value
    pub const fn bits(self) -> u32 {
        self.grid.bits() | self.segments.bits()
    }

    /// Bytes in transmission order (most significant first)
    pub const fn to_bytes(self) -> [u8; FRAME_BYTES] {
        let bits = self.bits();
        [(bits >> 16) as u8, (bits >> 8) as u8, bits as u8]
    }
}

/// Combine a grid selector and a segment mask into a frame
///
/// The two occupy disjoint bit ranges, so no validation is needed.
pub const fn encode_frame(grid: Grid, segments: SegmentMask) -> Frame {
    Frame::new(grid, segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GRID_MASK;
    use crate::segment::SEGMENT_MASK;
    use proptest::prelude::*;

    const ALL_GRIDS: [Grid; 9] = [
        Grid::Grid0,
        Grid::Grid1,
        Grid::Grid2,
        Grid::Grid3,
        Grid::Grid4,
        Grid::Grid5,
        Grid::Grid6,
        Grid::Grid7,
        Grid::Sign,
    ];

    #[test]
    fn test_masks_are_disjoint() {
        assert_eq!(GRID_MASK & SEGMENT_MASK, 0);
        assert_eq!((GRID_MASK | SEGMENT_MASK) & !FRAME_MASK, 0);
    }

    #[test]
    fn test_encode_digit_one_on_grid7() {
        let frame = encode_frame(Grid::Grid7, SegmentMask::B | SegmentMask::C);
        assert_eq!(frame.bits(), 0x0080_0C00);
        assert_eq!(frame.to_bytes(), [0x80, 0x0C, 0x00]);
    }

    #[test]
    fn test_encode_sign_minus() {
        let frame = encode_frame(Grid::Sign, SegmentMask::MINUS);
        assert_eq!(frame.bits(), 0x0000_8100);
        assert_eq!(frame.to_bytes(), [0x00, 0x81, 0x00]);
    }

    #[test]
    fn test_dark_frame_only_selects_grid() {
        let frame = Frame::dark(Grid::Sign);
        assert_eq!(frame.bits(), Grid::Sign.bits());
        assert!(frame.segments().is_empty());
    }

    #[test]
    fn test_zero_on_grid0_wire_bytes() {
        let zero = SegmentMask::A
            | SegmentMask::B
            | SegmentMask::C
            | SegmentMask::D
            | SegmentMask::E
            | SegmentMask::F;
        assert_eq!(encode_frame(Grid::Grid0, zero).to_bytes(), [0x01, 0x7E, 0x00]);
    }

    fn any_grid() -> impl Strategy<Value = Grid> {
        (0..ALL_GRIDS.len()).prop_map(|i| ALL_GRIDS[i])
    }

    fn any_segments() -> impl Strategy<Value = SegmentMask> {
        any::<u32>().prop_map(SegmentMask::from_bits_truncate)
    }

    proptest! {
        #[test]
        fn prop_fields_extract_from_wire_value(grid in any_grid(), segments in any_segments()) {
            let bits = encode_frame(grid, segments).bits();
            prop_assert_eq!(bits & GRID_MASK, grid.bits());
            prop_assert_eq!(bits & SEGMENT_MASK, segments.bits());
            prop_assert_eq!(bits & !FRAME_MASK, 0);
        }

        #[test]
        fn prop_wire_bytes_are_big_endian(grid in any_grid(), segments in any_segments()) {
            let frame = encode_frame(grid, segments);
            let [hi, mid, lo] = frame.to_bytes();
            prop_assert_eq!(u32::from_be_bytes([0, hi, mid, lo]), frame.bits());
        }
    }
}
