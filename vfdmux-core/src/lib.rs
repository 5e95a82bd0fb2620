//! Board-agnostic multiplexing engine for the IV-18 tube
//!
//! This crate contains everything that does not touch hardware directly:
//!
//! - Character to segment encoding
//! - The shared display buffer written by content producers
//! - The refresh scheduler that lights one grid per tick
//! - The transport trait the scheduler dispatches frames through
//! - Content formatting helpers
//! - Configuration types and the embedded config parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod glyph;
pub mod scheduler;
pub mod text;
pub mod traits;

pub use buffer::{DisplayBuffer, DISPLAY_WIDTH};
pub use scheduler::{RefreshScheduler, Tick};
pub use traits::{Transport, TransportError};
