//! Display flush task
//!
//! Holds the shared screen buffer and flushes it to the LCD whenever the
//! controller signals an update.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;

use obol_core::traits::display::{DisplayDriver, DisplayError, DISPLAY_ROWS};

use crate::channels::SCREEN_UPDATE;
use crate::display::{Hd44780, Screen};

/// Shared screen buffer protected by mutex
pub static SCREEN_BUFFER: Mutex<CriticalSectionRawMutex, Screen> = Mutex::new(Screen::new());

/// Display task - flushes screen updates to the LCD
#[embassy_executor::task]
pub async fn display_task(mut lcd: Hd44780) {
    info!("Display task started");

    loop {
        SCREEN_UPDATE.wait().await;

        let screen = SCREEN_BUFFER.lock().await.clone();
        if let Err(e) = flush(&mut lcd, &screen) {
            warn!("LCD flush failed: {:?}", e);
        }
    }
}

/// Write a screen buffer out through any display driver
fn flush<D: DisplayDriver>(display: &mut D, screen: &Screen) -> Result<(), DisplayError> {
    display.clear()?;
    for row in 0..DISPLAY_ROWS {
        let line = screen.line(row);
        if !line.is_empty() {
            display.text(row, 0, line)?;
        }
    }
    display.cursor_visible(screen.cursor_visible())?;
    Ok(())
}
