//! Per-tick refresh of the tube
//!
//! Each call to [`RefreshScheduler::tick`] lights exactly one grid. The
//! cursor walks buffer positions 0..=8:
//!
//! - position 0 is the sign slot. If it holds `-` or `*` that mark is shown
//!   on the sign grid; otherwise a dark sign frame is sent, so any other
//!   character in slot 0 is never displayed and every grid keeps the same
//!   1/9 duty cycle.
//! - positions 1..=8 map onto [`GRID_ORDER`]: position 1 is the leftmost
//!   digit (Grid7), position 8 the rightmost (Grid0).
//!
//! Buffer position 9 is outside the cycle and never shown.

use vfdmux_protocol::{encode_frame, Frame, Grid};

use crate::buffer::{DisplayBuffer, DISPLAY_WIDTH, SIGN_SLOT};
use crate::glyph;
use crate::traits::{Transport, TransportError};

/// Ticks per full pass over the tube (sign + 8 digits)
pub const CYCLE_LEN: usize = DISPLAY_WIDTH - 1;

/// Digit grid wired to buffer positions 1..=8
pub const GRID_ORDER: [Grid; 8] = [
    Grid::Grid7,
    Grid::Grid6,
    Grid::Grid5,
    Grid::Grid4,
    Grid::Grid3,
    Grid::Grid2,
    Grid::Grid1,
    Grid::Grid0,
];

/// Grid lit for a buffer position, `None` outside the cycle
pub const fn grid_for(position: usize) -> Option<Grid> {
    match position {
        SIGN_SLOT => Some(Grid::Sign),
        p if p < CYCLE_LEN => Some(GRID_ORDER[p - 1]),
        _ => None,
    }
}

/// What happened to a tick's frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    Sent,
    Dropped(TransportError),
}

/// Record of one refresh tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tick {
    /// Buffer position rendered
    pub position: usize,
    /// Character rendered (a space for a dark sign slot)
    pub glyph: u8,
    /// Frame handed to the transport
    pub frame: Frame,
    pub dispatch: Dispatch,
}

/// Running totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshStats {
    pub ticks: u32,
    pub sent: u32,
    pub dropped: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RefreshState {
    Running,
    /// Shut down; ticks are ignored
    Stopped,
}

/// Multiplexing scheduler
///
/// Holds the refresh cursor and reads the shared buffer. Nothing else may
/// move the cursor. `tick` borrows the transport exclusively for the whole
/// tick, so two frames can never be in flight at once.
pub struct RefreshScheduler<'a> {
    buffer: &'a DisplayBuffer,
    cursor: usize,
    state: RefreshState,
    stats: RefreshStats,
}

impl<'a> RefreshScheduler<'a> {
    /// Start at the sign slot
    pub const fn new(buffer: &'a DisplayBuffer) -> Self {
        Self {
            buffer,
            cursor: SIGN_SLOT,
            state: RefreshState::Running,
            stats: RefreshStats {
                ticks: 0,
                sent: 0,
                dropped: 0,
            },
        }
    }

    /// Buffer position the next tick renders
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn state(&self) -> RefreshState {
        self.state
    }

    pub fn stats(&self) -> RefreshStats {
        self.stats
    }

    /// Glyph and frame for `position` given the current buffer contents
    pub fn frame_at(&self, position: usize) -> (u8, Frame) {
        let c = self.buffer.get(position).unwrap_or(b' ');

        match grid_for(position) {
            // The sign grid can only show '-' or '*'
            Some(grid) if !grid.is_sign() || glyph::is_sign(c as char) => {
                (c, encode_frame(grid, glyph::encode_byte(c)))
            }
            _ => (b' ', Frame::dark(Grid::Sign)),
        }
    }

    /// Light the next grid and advance the cursor
    ///
    /// Returns `None` once the scheduler has been shut down. A frame the
    /// transport refuses is dropped; the cursor still advances.
    pub fn tick<T: Transport>(&mut self, transport: &mut T) -> Option<Tick> {
        if self.state == RefreshState::Stopped {
            return None;
        }

        let position = self.cursor;
        let (glyph, frame) = self.frame_at(position);

        let dispatch = match transport.send(frame) {
            Ok(()) => {
                self.stats.sent = self.stats.sent.wrapping_add(1);
                Dispatch::Sent
            }
            Err(e) => {
                self.stats.dropped = self.stats.dropped.wrapping_add(1);
                Dispatch::Dropped(e)
            }
        };
        self.stats.ticks = self.stats.ticks.wrapping_add(1);

        self.cursor = (position + 1) % CYCLE_LEN;

        Some(Tick {
            position,
            glyph,
            frame,
            dispatch,
        })
    }

    /// Stop refreshing and leave the tube blanked
    ///
    /// The caller must already have stopped the tick source, and releases
    /// the transport afterwards.
    pub fn shutdown<T: Transport>(&mut self, transport: &mut T) {
        self.state = RefreshState::Stopped;
        transport.blank();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;
    use vfdmux_protocol::SegmentMask;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Blank,
        Send(Frame),
        Unblank,
    }

    /// Transport that records calls and brackets sends like the real chip
    struct MockTransport {
        calls: Vec<Call, 128>,
        refuse_next: Option<TransportError>,
    }

    impl MockTransport {
        fn new() -> Self {
            Self {
                calls: Vec::new(),
                refuse_next: None,
            }
        }

        fn sent(&self) -> impl Iterator<Item = Frame> + '_ {
            self.calls.iter().filter_map(|c| match c {
                Call::Send(f) => Some(*f),
                _ => None,
            })
        }
    }

    impl Transport for MockTransport {
        fn blank(&mut self) {
            self.calls.push(Call::Blank).unwrap();
        }

        fn unblank(&mut self) {
            self.calls.push(Call::Unblank).unwrap();
        }

        fn send(&mut self, frame: Frame) -> Result<(), TransportError> {
            if let Some(e) = self.refuse_next.take() {
                return Err(e);
            }
            self.blank();
            self.calls.push(Call::Send(frame)).unwrap();
            self.unblank();
            Ok(())
        }
    }

    #[test]
    fn test_grid_mapping() {
        assert_eq!(grid_for(0), Some(Grid::Sign));
        assert_eq!(grid_for(1), Some(Grid::Grid7));
        assert_eq!(grid_for(8), Some(Grid::Grid0));
        assert_eq!(grid_for(9), None);
    }

    #[test]
    fn test_deadbeef_cycle() {
        let buffer = DisplayBuffer::new();
        buffer.set_display("*DEADBEEF");
        let mut scheduler = RefreshScheduler::new(&buffer);
        let mut transport = MockTransport::new();

        let expected = [
            (Grid::Sign, '*'),
            (Grid::Grid7, 'D'),
            (Grid::Grid6, 'E'),
            (Grid::Grid5, 'A'),
            (Grid::Grid4, 'D'),
            (Grid::Grid3, 'B'),
            (Grid::Grid2, 'E'),
            (Grid::Grid1, 'E'),
            (Grid::Grid0, 'F'),
        ];

        for _ in 0..2 {
            for (grid, c) in expected {
                let tick = scheduler.tick(&mut transport).unwrap();
                assert_eq!(tick.frame, encode_frame(grid, glyph::encode(c)));
                assert_eq!(tick.glyph, c as u8);
                assert_eq!(tick.dispatch, Dispatch::Sent);
            }
            assert_eq!(scheduler.cursor(), 0);
        }

        assert_eq!(transport.sent().count(), 18);
    }

    #[test]
    fn test_cycle_visits_each_position_once() {
        let buffer = DisplayBuffer::new();
        buffer.set_display("-12345678");
        let mut scheduler = RefreshScheduler::new(&buffer);
        let mut transport = MockTransport::new();

        let mut seen = [0u8; CYCLE_LEN];
        for _ in 0..CYCLE_LEN {
            let tick = scheduler.tick(&mut transport).unwrap();
            seen[tick.position] += 1;
        }

        assert_eq!(seen, [1; CYCLE_LEN]);
        assert_eq!(scheduler.cursor(), 0);
    }

    #[test]
    fn test_minus_in_sign_slot_lights_sign_grid() {
        let buffer = DisplayBuffer::new();
        buffer.set_display("-       1");
        let mut scheduler = RefreshScheduler::new(&buffer);
        let mut transport = MockTransport::new();

        let tick = scheduler.tick(&mut transport).unwrap();
        assert_eq!(tick.frame.grid(), Grid::Sign);
        assert_eq!(tick.frame.segments(), SegmentMask::MINUS);
    }

    #[test]
    fn test_plain_character_in_sign_slot_is_never_shown() {
        let buffer = DisplayBuffer::new();
        buffer.set_display("512345678");
        let mut scheduler = RefreshScheduler::new(&buffer);
        let mut transport = MockTransport::new();

        let first = scheduler.tick(&mut transport).unwrap();
        assert_eq!(first.position, 0);
        assert_eq!(first.frame, Frame::dark(Grid::Sign));
        assert_eq!(first.glyph, b' ');

        // Positions 1..=8 proceed as if slot 0 were absent
        for (i, c) in "12345678".chars().enumerate() {
            let tick = scheduler.tick(&mut transport).unwrap();
            assert_eq!(tick.frame.grid(), GRID_ORDER[i]);
            assert_eq!(tick.frame.segments(), glyph::encode(c));
        }

        // No frame ever carried the '5' glyph on the sign grid
        assert!(transport
            .sent()
            .filter(|f| f.grid() == Grid::Sign)
            .all(|f| f.segments().is_empty()));
    }

    #[test]
    fn test_sign_slot_change_is_picked_up_next_cycle() {
        let buffer = DisplayBuffer::new();
        buffer.set_display(" 00000000");
        let mut scheduler = RefreshScheduler::new(&buffer);
        let mut transport = MockTransport::new();

        for _ in 0..CYCLE_LEN {
            scheduler.tick(&mut transport);
        }
        buffer.set_display("*00000000");

        let tick = scheduler.tick(&mut transport).unwrap();
        assert_eq!(tick.frame, encode_frame(Grid::Sign, SegmentMask::DEGREE));
    }

    #[test]
    fn test_tenth_character_is_never_shown() {
        let buffer = DisplayBuffer::new();
        buffer.set_display(" 12345678X");
        let mut scheduler = RefreshScheduler::new(&buffer);
        let mut transport = MockTransport::new();

        for _ in 0..CYCLE_LEN * 3 {
            let tick = scheduler.tick(&mut transport).unwrap();
            assert_ne!(tick.position, DISPLAY_WIDTH - 1);
        }
    }

    #[test]
    fn test_sends_are_bracketed_by_blanking() {
        let buffer = DisplayBuffer::new();
        buffer.set_display("-01234567");
        let mut scheduler = RefreshScheduler::new(&buffer);
        let mut transport = MockTransport::new();

        for _ in 0..20 {
            scheduler.tick(&mut transport);
        }

        assert_eq!(transport.calls.len(), 60);
        for chunk in transport.calls.chunks(3) {
            assert!(matches!(chunk, [Call::Blank, Call::Send(_), Call::Unblank]));
        }
    }

    #[test]
    fn test_dropped_frame_still_advances() {
        let buffer = DisplayBuffer::new();
        buffer.set_display(" 12345678");
        let mut scheduler = RefreshScheduler::new(&buffer);
        let mut transport = MockTransport::new();

        transport.refuse_next = Some(TransportError::Busy);
        let tick = scheduler.tick(&mut transport).unwrap();
        assert_eq!(tick.dispatch, Dispatch::Dropped(TransportError::Busy));
        assert_eq!(scheduler.cursor(), 1);

        let tick = scheduler.tick(&mut transport).unwrap();
        assert_eq!(tick.dispatch, Dispatch::Sent);

        assert_eq!(
            scheduler.stats(),
            RefreshStats {
                ticks: 2,
                sent: 1,
                dropped: 1,
            }
        );
    }

    #[test]
    fn test_shutdown_blanks_and_stops() {
        let buffer = DisplayBuffer::new();
        buffer.set_display(" 88888888");
        let mut scheduler = RefreshScheduler::new(&buffer);
        let mut transport = MockTransport::new();

        scheduler.tick(&mut transport);
        scheduler.shutdown(&mut transport);

        assert_eq!(scheduler.state(), RefreshState::Stopped);
        assert_eq!(transport.calls.last(), Some(&Call::Blank));

        let calls_before = transport.calls.len();
        assert_eq!(scheduler.tick(&mut transport), None);
        assert_eq!(transport.calls.len(), calls_before);
    }
}
