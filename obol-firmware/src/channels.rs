//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use obol_core::state::{Event, InputEvent};
use obol_core::vend::Outputs;

/// Channel capacity for input events from the panel and coin slot
const INPUT_CHANNEL_SIZE: usize = 8;

/// Channel capacity for state events
const EVENT_CHANNEL_SIZE: usize = 8;

/// Input events (button edges, coin pulses) queued for the controller
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, InputEvent, INPUT_CHANNEL_SIZE> =
    Channel::new();

/// State machine events (for logging/debugging)
pub static EVENT_CHANNEL: Channel<CriticalSectionRawMutex, Event, EVENT_CHANNEL_SIZE> =
    Channel::new();

/// Signal that a screen update is ready to be flushed to the LCD
pub static SCREEN_UPDATE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Discrete output command (updated by the controller)
pub static OUTPUT_CMD: Signal<CriticalSectionRawMutex, Outputs> = Signal::new();

/// Latest tilt sensor reading (updated by the tilt task)
pub static TILT_READING: Signal<CriticalSectionRawMutex, i16> = Signal::new();
