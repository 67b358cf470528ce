//! Tick task for time-based updates
//!
//! Provides periodic ticks to the controller for:
//! - Dispense-phase timing (drink progress, coin ejects, ready hold)
//! - Tilt sampling cadence
//! - Display refresh

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u32 = 100;

/// Signal to notify the controller of a tick
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Tick task - sends periodic tick signals
///
/// The tick carries no payload: every phase duration in the core is counted
/// in whole ticks, so the controller never needs wall-clock time.
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));

    loop {
        ticker.next().await;
        TICK_SIGNAL.signal(());
    }
}
