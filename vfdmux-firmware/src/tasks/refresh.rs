//! Refresh task
//!
//! Owns the MAX6921 and the refresh cursor. On every ticker period it
//! lights the next grid; on shutdown it stops ticking, blanks the tube and
//! releases the hardware.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::peripherals::SPI0;
use embassy_time::{Duration, Ticker};

use vfdmux_core::scheduler::{Dispatch, RefreshRate, RefreshScheduler};
use vfdmux_core::DisplayBuffer;
use vfdmux_drivers::Max6921;
use vfdmux_hal_rp2040::{Rp2040Output, Rp2040Spi};

use crate::channels::{REFRESH_STOPPED, SHUTDOWN};

/// Seconds between statistics reports
const STATS_INTERVAL_S: u32 = 10;

/// The tube driver as wired on this board
pub type TubeDriver =
    Max6921<Rp2040Spi<'static, SPI0>, Rp2040Output<'static>, Rp2040Output<'static>>;

#[embassy_executor::task]
pub async fn refresh_task(
    mut driver: TubeDriver,
    buffer: &'static DisplayBuffer,
    rate: RefreshRate,
) {
    info!("Refresh task started, {} us per grid", rate.period_us());

    let mut scheduler = RefreshScheduler::new(buffer);
    let mut ticker = Ticker::every(Duration::from_micros(rate.period_us() as u64));
    let stats_every = rate.hz().saturating_mul(STATS_INTERVAL_S).max(1);

    driver.enable();

    loop {
        match select(ticker.next(), SHUTDOWN.wait()).await {
            Either::First(()) => {}
            Either::Second(()) => break,
        }

        let Some(tick) = scheduler.tick(&mut driver) else {
            break;
        };

        if let Dispatch::Dropped(e) = tick.dispatch {
            trace!("Frame for position {} dropped: {:?}", tick.position, e);
        }

        let stats = scheduler.stats();
        if stats.ticks % stats_every == 0 {
            debug!(
                "Refresh: {} ticks, {} sent, {} dropped",
                stats.ticks, stats.sent, stats.dropped
            );
        }
    }

    scheduler.shutdown(&mut driver);
    let (spi, blank, load) = driver.release();
    drop(spi);

    let stats = scheduler.stats();
    info!(
        "Refresh stopped after {} ticks ({} dropped), tube blanked",
        stats.ticks, stats.dropped
    );
    REFRESH_STOPPED.signal(());

    // Dropping an output floats the pin; keep BLANK driven until reset
    let _pins = (blank, load);
    core::future::pending::<()>().await;
}
