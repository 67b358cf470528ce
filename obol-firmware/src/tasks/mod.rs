//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod controller;
pub mod display;
pub mod input;
pub mod outputs;
pub mod tick;
pub mod tilt;

pub use controller::controller_task;
pub use display::display_task;
pub use input::{input_task, InputPins};
pub use outputs::{outputs_task, OutputPins};
pub use tick::tick_task;
pub use tilt::tilt_task;
