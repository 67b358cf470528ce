//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod display;
pub mod io;

pub use display::{DisplayDriver, DisplayError, DISPLAY_COLS, DISPLAY_ROWS};
pub use io::{OutputPort, TiltSensor};
