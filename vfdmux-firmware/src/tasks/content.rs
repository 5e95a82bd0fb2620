//! Content task
//!
//! The only writer of the display buffer. Depending on the configured mode
//! it shows fixed text, the time since boot, or a running counter.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Instant, Ticker};

use vfdmux_core::config::{ContentMode, DisplayConfig};
use vfdmux_core::text::{self, SIGNED_MAX};
use vfdmux_core::DisplayBuffer;

use crate::channels::REFRESH_STOPPED;

#[embassy_executor::task]
pub async fn content_task(buffer: &'static DisplayBuffer, config: DisplayConfig) {
    info!("Content task started ({:?})", config.content);

    buffer.set_display(&config.text);
    debug!("Showing \"{=[u8]:a}\"", &buffer.snapshot()[..]);

    if config.content == ContentMode::Static {
        return;
    }

    let mut ticker = Ticker::every(Duration::from_millis(config.update_ms as u64));
    let mut counter: i32 = 0;

    loop {
        match select(ticker.next(), REFRESH_STOPPED.wait()).await {
            Either::First(()) => {}
            Either::Second(()) => break,
        }

        match config.content {
            ContentMode::Static => {}
            ContentMode::Uptime => {
                buffer.set_display(&text::clock_from_secs(Instant::now().as_secs()));
            }
            ContentMode::Counter => {
                if let Some(s) = text::signed(counter) {
                    buffer.set_display(&s);
                }
                counter = if counter >= SIGNED_MAX {
                    -SIGNED_MAX
                } else {
                    counter + 1
                };
            }
        }
    }

    info!("Content task stopped");
}
