//! Refresh scheduler
//!
//! Time-slices the tube: one grid per tick, cycling through the sign
//! position and the eight digits.

pub mod rate;
pub mod refresh;

pub use rate::{RefreshRate, MIN_FLICKER_FREE_HZ, PERSISTENCE_HZ};
pub use refresh::{
    grid_for, Dispatch, RefreshScheduler, RefreshState, RefreshStats, Tick, CYCLE_LEN,
    GRID_ORDER,
};
