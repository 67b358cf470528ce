//! Front panel and coin slot input task
//!
//! Polls the two panel buttons and the three coin-switch lines, turning
//! debounced rising edges into [`InputEvent`]s for the controller. Coin
//! switches close once per coin passing the acceptor.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Ticker};

use obol_core::state::InputEvent;

use crate::channels::INPUT_CHANNEL;

/// Poll period for input scanning (fast enough to catch coin pulses)
const SCAN_INTERVAL_MS: u64 = 10;

/// Consecutive active scans required before an edge is accepted
const DEBOUNCE_SCANS: u8 = 2;

/// The five input lines, active high
pub struct InputPins {
    pub next_drink: Input<'static>,
    pub select: Input<'static>,
    pub coin_10: Input<'static>,
    pub coin_20: Input<'static>,
    pub coin_50: Input<'static>,
}

/// Per-line debounce and edge state
#[derive(Default)]
struct LineState {
    active_scans: u8,
    reported: bool,
}

impl LineState {
    /// Feed one scan; returns true on a debounced rising edge
    fn scan(&mut self, active: bool) -> bool {
        if !active {
            self.active_scans = 0;
            self.reported = false;
            return false;
        }
        self.active_scans = self.active_scans.saturating_add(1);
        if self.active_scans >= DEBOUNCE_SCANS && !self.reported {
            self.reported = true;
            return true;
        }
        false
    }
}

/// Input task - scans buttons and coin switches
#[embassy_executor::task]
pub async fn input_task(pins: InputPins) {
    info!("Input task started");

    let mut ticker = Ticker::every(Duration::from_millis(SCAN_INTERVAL_MS));

    let mut next_drink = LineState::default();
    let mut select = LineState::default();
    let mut coin_10 = LineState::default();
    let mut coin_20 = LineState::default();
    let mut coin_50 = LineState::default();

    loop {
        ticker.next().await;

        if next_drink.scan(pins.next_drink.is_high()) {
            send(InputEvent::NextDrink).await;
        }
        if select.scan(pins.select.is_high()) {
            send(InputEvent::Select).await;
        }
        if coin_10.scan(pins.coin_10.is_high()) {
            send(InputEvent::Coin(10)).await;
        }
        if coin_20.scan(pins.coin_20.is_high()) {
            send(InputEvent::Coin(20)).await;
        }
        if coin_50.scan(pins.coin_50.is_high()) {
            send(InputEvent::Coin(50)).await;
        }
    }
}

async fn send(event: InputEvent) {
    trace!("Input event: {:?}", event);
    INPUT_CHANNEL.send(event).await;
}
