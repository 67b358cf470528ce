//! Display rendering and the LCD driver

pub mod hd44780;
pub mod renderer;

pub use hd44780::{Hd44780, LcdPins};
pub use renderer::{Renderer, Screen};
