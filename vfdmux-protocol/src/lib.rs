//! MAX6921 Frame Protocol
//!
//! This crate defines the 24-bit word shifted into the MAX6921 driver chip
//! for one multiplexing slice of the IV-18 tube. Each word selects exactly
//! one grid and the segments to light on it.
//!
//! # Frame Layout
//!
//! ```text
//!  23            16  15  14  13  12  11  10   9   8   7 ...  1   0
//! ┌────────────────┬───┬───┬───┬───┬───┬───┬───┬────┬──────────┬─────┐
//! │ GRID 7 .. 0    │ G │ F │ E │ D │ C │ B │ A │SIGN│ unused   │ DOT │
//! │ one-hot        │ - │   │   │   │   │   │   │grid│          │ deg │
//! └────────────────┴───┴───┴───┴───┴───┴───┴───┴────┴──────────┴─────┘
//! ```
//!
//! Frames go out as three bytes, most significant first. Grid bits and
//! segment bits never overlap, so a frame is just the OR of the two.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod frame;
pub mod grid;
pub mod segment;

pub use frame::{encode_frame, Frame, FRAME_BYTES, FRAME_MASK};
pub use grid::{Grid, GRID_MASK};
pub use segment::{SegmentMask, SEGMENT_MASK};
