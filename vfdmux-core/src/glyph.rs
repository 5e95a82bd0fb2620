//! Character to segment encoding
//!
//! The tube only needs hex digits and a handful of marks. Encoding is total:
//! anything unrecognised shows as `A`, which makes bad input visible on the
//! tube instead of silently dark.

use vfdmux_protocol::SegmentMask;

const A: SegmentMask = SegmentMask::A;
const B: SegmentMask = SegmentMask::B;
const C: SegmentMask = SegmentMask::C;
const D: SegmentMask = SegmentMask::D;
const E: SegmentMask = SegmentMask::E;
const F: SegmentMask = SegmentMask::F;
const G: SegmentMask = SegmentMask::G;

/// Glyphs for 0-9 and A-F, indexed by digit value
pub const HEX_DIGITS: [SegmentMask; 16] = [
    A.union(B).union(C).union(D).union(E).union(F),          // 0
    B.union(C),                                              // 1
    A.union(B).union(D).union(E).union(G),                   // 2
    A.union(B).union(C).union(D).union(G),                   // 3
    B.union(C).union(F).union(G),                            // 4
    A.union(C).union(D).union(F).union(G),                   // 5
    A.union(C).union(D).union(E).union(F).union(G),          // 6
    A.union(B).union(C),                                     // 7
    A.union(B).union(C).union(D).union(E).union(F).union(G), // 8
    A.union(B).union(C).union(D).union(F).union(G),          // 9
    A.union(B).union(C).union(E).union(F).union(G),          // A
    C.union(D).union(E).union(F).union(G),                   // b
    A.union(D).union(E).union(F),                            // C
    B.union(C).union(D).union(E).union(G),                   // d
    A.union(D).union(E).union(F).union(G),                   // E
    A.union(E).union(F).union(G),                            // F
];

/// Shown for any character outside the recognised set
pub const FALLBACK: SegmentMask = HEX_DIGITS[10];

/// Encode one character
pub const fn encode(c: char) -> SegmentMask {
    match c {
        '0'..='9' => HEX_DIGITS[c as usize - '0' as usize],
        'A'..='F' => HEX_DIGITS[c as usize - 'A' as usize + 10],
        'a'..='f' => HEX_DIGITS[c as usize - 'a' as usize + 10],
        '.' => SegmentMask::DOT,
        '*' => SegmentMask::DEGREE,
        '-' => SegmentMask::MINUS,
        ' ' => SegmentMask::EMPTY,
        _ => FALLBACK,
    }
}

/// Encode a raw buffer byte
pub const fn encode_byte(b: u8) -> SegmentMask {
    encode(b as char)
}

/// Whether `c` has its own glyph (rather than the fallback)
pub const fn is_recognized(c: char) -> bool {
    matches!(c, '0'..='9' | 'A'..='F' | 'a'..='f' | '.' | '*' | '-' | ' ')
}

/// Whether `c` is one of the two marks the sign grid can show
pub const fn is_sign(c: char) -> bool {
    matches!(c, '-' | '*')
}
