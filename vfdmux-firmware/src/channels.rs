//! Inter-task communication
//!
//! Static signals shared between the embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Request to stop refreshing (raised by the shutdown button)
pub static SHUTDOWN: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Refresh has stopped and the tube is blanked
pub static REFRESH_STOPPED: Signal<CriticalSectionRawMutex, ()> = Signal::new();
