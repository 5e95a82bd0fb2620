//! vfdmux Hardware Abstraction Layer
//!
//! The tube driver only needs two kinds of hardware: a write-only serial
//! bus that shifts a frame into the driver chip, and plain digital outputs
//! for the blanking and latch (LOAD) lines. This crate defines those as
//! traits so the driver logic can be tested on the host and run on any
//! chip with an implementation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  vfdmux-drivers (MAX6921 adapter)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  vfdmux-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  vfdmux-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital outputs (blank, load)
//! - [`spi::SpiBus`] - Write-only serial bus

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use gpio::{Level, OutputPin, Polarity};
pub use spi::{BitOrder, SpiBus, SpiConfig, SpiMode};
