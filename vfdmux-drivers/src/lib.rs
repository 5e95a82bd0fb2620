//! Hardware driver implementations
//!
//! Concrete implementations of the traits defined in vfdmux-core, written
//! against the vfdmux-hal pin and bus traits:
//!
//! - MAX6921 high-voltage driver as a frame [`Transport`](vfdmux_core::Transport)

#![no_std]
#![deny(unsafe_code)]

pub mod max6921;

pub use max6921::Max6921;
