//! Hardware abstraction traits
//!
//! These traits define the interface between the multiplexing engine and
//! the hardware-specific driver.

pub mod transport;

pub use transport::{Transport, TransportError};
