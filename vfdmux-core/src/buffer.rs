//! Shared display buffer
//!
//! The buffer is read one character per tick by the refresh scheduler and
//! written now and then by content producers running at normal priority.
//! It is double-buffered: a writer fills the back bank and then publishes
//! it by swapping the front index, so the reader never sees a half-copied
//! text. Every cell is a single atomic byte, so no read can tear a
//! character either.
//!
//! # Tear window
//!
//! The reader picks the front bank afresh on every tick. If a writer
//! publishes twice while the reader is between loading the front index and
//! loading the cell, the second write lands in the bank being read, and
//! that one character may come from the newer text one tick early. The
//! tube shows it for 2 ms at most. The buffer assumes a single writer at a
//! time; serialise writers at the call site if there are several.

use portable_atomic::{AtomicU8, Ordering};

/// Characters in the buffer, sign slot included
pub const DISPLAY_WIDTH: usize = 10;

/// Index of the sign / degree slot
pub const SIGN_SLOT: usize = 0;

/// Stored for characters that do not fit in a byte
const UNPRINTABLE: u8 = 0xFF;

/// Plain copy of the buffer contents
pub type DisplayText = [u8; DISPLAY_WIDTH];

type Bank = [AtomicU8; DISPLAY_WIDTH];

#[allow(clippy::declare_interior_mutable_const)]
const BLANK_CELL: AtomicU8 = AtomicU8::new(b' ');
#[allow(clippy::declare_interior_mutable_const)]
const BLANK_BANK: Bank = [BLANK_CELL; DISPLAY_WIDTH];

/// Double-buffered, lock-free character buffer
pub struct DisplayBuffer {
    banks: [Bank; 2],
    /// Bank the reader uses (0 or 1)
    front: AtomicU8,
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBuffer {
    /// A buffer showing nothing
    pub const fn new() -> Self {
        Self {
            banks: [BLANK_BANK, BLANK_BANK],
            front: AtomicU8::new(0),
        }
    }

    fn front_index(&self) -> usize {
        usize::from(self.front.load(Ordering::Acquire) & 1)
    }

    /// Fill the back bank from `cells` and make it the front
    fn publish(&self, cells: impl Iterator<Item = u8>) {
        let back = self.front_index() ^ 1;
        let bank = &self.banks[back];

        let mut cells = cells;
        for cell in bank.iter() {
            cell.store(cells.next().unwrap_or(b' '), Ordering::Relaxed);
        }

        self.front.store(back as u8, Ordering::Release);
    }

    /// Replace the contents with `text`
    ///
    /// Takes the first [`DISPLAY_WIDTH`] characters and pads with spaces.
    /// Index 0 is the sign slot: `-` or `*` there lights the sign grid, any
    /// other character there is never shown.
    pub fn set_display(&self, text: &str) {
        self.publish(
            text.chars()
                .take(DISPLAY_WIDTH)
                .map(|c| u8::try_from(c).unwrap_or(UNPRINTABLE)),
        );
    }

    /// Character at `index` in the current front bank
    pub fn get(&self, index: usize) -> Option<u8> {
        self.banks[self.front_index()]
            .get(index)
            .map(|cell| cell.load(Ordering::Relaxed))
    }

    /// Copy of the current front bank
    pub fn snapshot(&self) -> DisplayText {
        let bank = &self.banks[self.front_index()];
        let mut text = [b' '; DISPLAY_WIDTH];
        for (out, cell) in text.iter_mut().zip(bank.iter()) {
            *out = cell.load(Ordering::Relaxed);
        }
        text
    }
}
