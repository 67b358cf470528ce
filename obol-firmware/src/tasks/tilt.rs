//! Tilt sensor sampling task
//!
//! Reads the tilt sensor ADC channel once per tick period and publishes the
//! reading for the controller. The controller does the threshold check; this
//! task only moves numbers.

use defmt::*;
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_time::{Duration, Ticker};

use crate::channels::TILT_READING;
use crate::tasks::tick::TICK_INTERVAL_MS;

/// The sensor delivers roughly 100 counts per volt in the original
/// electrical design; readings are rescaled so the core's threshold of 200
/// keeps meaning 2.0 V.
const ADC_COUNTS_PER_UNIT: u16 = 12;

/// Tilt sampling task
#[embassy_executor::task]
pub async fn tilt_task(mut adc: Adc<'static, Async>, mut channel: Channel<'static>) {
    info!("Tilt task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));

    loop {
        ticker.next().await;

        match adc.read(&mut channel).await {
            Ok(raw) => {
                let reading = (raw / ADC_COUNTS_PER_UNIT) as i16;
                TILT_READING.signal(reading);
            }
            Err(e) => {
                warn!("Tilt ADC read failed: {:?}", e);
            }
        }
    }
}
