//! Content formatting helpers
//!
//! Produce strings laid out for the tube: slot 0 is the sign position and
//! slots 1..=8 are the digits, left to right.

use core::fmt::Write;

use heapless::String;

use crate::buffer::DISPLAY_WIDTH;
use crate::scheduler::CYCLE_LEN;

/// Text sized for the display buffer
pub type DisplayString = String<DISPLAY_WIDTH>;

/// Largest magnitude [`signed`] can show in eight digits
pub const SIGNED_MAX: i32 = 99_999_999;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Wall-clock layout `" HH MM SS"`, each field wrapped to two digits
pub fn clock(hours: u8, minutes: u8, seconds: u8) -> DisplayString {
    let mut s = DisplayString::new();
    // Nine characters always fit
    let _ = write!(
        s,
        " {:02} {:02} {:02}",
        hours % 100,
        minutes % 100,
        seconds % 100
    );
    s
}

/// Clock layout for an elapsed time, wrapping every 24 hours
pub fn clock_from_secs(secs: u64) -> DisplayString {
    let secs = secs % SECS_PER_DAY;
    clock(
        (secs / 3600) as u8,
        ((secs / 60) % 60) as u8,
        (secs % 60) as u8,
    )
}

/// Right-aligned integer with the minus sign on the sign grid
///
/// Returns `None` when the magnitude needs more than eight digits.
pub fn signed(value: i32) -> Option<DisplayString> {
    if value.unsigned_abs() > SIGNED_MAX as u32 {
        return None;
    }

    let sign = if value < 0 { '-' } else { ' ' };
    let mut s = DisplayString::new();
    write!(
        s,
        "{}{:>width$}",
        sign,
        value.unsigned_abs(),
        width = CYCLE_LEN - 1
    )
    .ok()?;
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_layout() {
        assert_eq!(clock(9, 5, 3).as_str(), " 09 05 03");
        assert_eq!(clock(23, 59, 59).as_str(), " 23 59 59");
    }

    #[test]
    fn test_clock_from_secs() {
        assert_eq!(clock_from_secs(0).as_str(), " 00 00 00");
        assert_eq!(clock_from_secs(3_723).as_str(), " 01 02 03");
        assert_eq!(clock_from_secs(SECS_PER_DAY + 61).as_str(), " 00 01 01");
    }

    #[test]
    fn test_clock_leaves_sign_slot_blank() {
        let s = clock(12, 34, 56);
        assert_eq!(s.len(), CYCLE_LEN);
        assert_eq!(s.as_bytes()[0], b' ');
    }

    #[test]
    fn test_signed_positive() {
        assert_eq!(signed(0).unwrap().as_str(), "        0");
        assert_eq!(signed(1234).unwrap().as_str(), "     1234");
    }

    #[test]
    fn test_signed_negative_uses_sign_slot() {
        let s = signed(-42).unwrap();
        assert_eq!(s.as_str(), "-      42");
        assert_eq!(s.len(), CYCLE_LEN);
    }

    #[test]
    fn test_signed_limits() {
        assert_eq!(signed(SIGNED_MAX).unwrap().as_str(), " 99999999");
        assert_eq!(signed(-SIGNED_MAX).unwrap().as_str(), "-99999999");
        assert_eq!(signed(SIGNED_MAX + 1), None);
        assert_eq!(signed(i32::MIN), None);
    }
}
