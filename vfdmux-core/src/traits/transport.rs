//! Frame transport to the driver chip

use vfdmux_protocol::Frame;

/// Errors that can occur when dispatching a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Previous frame still being shifted out
    Busy,
    /// The serial bus reported an error
    Bus,
}

/// Link to the tube driver chip
///
/// Implementations own the serial bus and the blank/load pins.
///
/// # Contract
///
/// `send` must blank the tube immediately before the frame is latched into
/// the driver outputs and unblank immediately after, so no partially shifted
/// pattern is ever visible. It must not block for longer than one frame
/// takes on the wire: a busy link is reported as [`TransportError::Busy`]
/// and the frame is dropped. The next refresh tick overwrites it anyway.
pub trait Transport {
    /// Turn every output off
    fn blank(&mut self);

    /// Let the latched pattern show
    fn unblank(&mut self);

    /// Shift `frame` into the driver and latch it
    fn send(&mut self, frame: Frame) -> Result<(), TransportError>;
}
