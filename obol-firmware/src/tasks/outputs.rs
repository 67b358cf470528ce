//! Discrete output task
//!
//! Applies the controller's output commands to the dispense valve, change
//! hopper, and alarm lines.

use defmt::*;
use embassy_rp::gpio::Output;

use obol_core::traits::io::OutputPort;
use obol_core::vend::Outputs;

use crate::channels::OUTPUT_CMD;

/// The three actuator lines, active high
pub struct OutputPins {
    pub drink: Output<'static>,
    pub change: Output<'static>,
    pub alarm: Output<'static>,
}

impl OutputPort for OutputPins {
    fn set_drink(&mut self, on: bool) {
        if on {
            self.drink.set_high();
        } else {
            self.drink.set_low();
        }
    }

    fn set_change(&mut self, on: bool) {
        if on {
            self.change.set_high();
        } else {
            self.change.set_low();
        }
    }

    fn set_alarm(&mut self, on: bool) {
        if on {
            self.alarm.set_high();
        } else {
            self.alarm.set_low();
        }
    }
}

/// Output task - drives the actuator lines from controller commands
#[embassy_executor::task]
pub async fn outputs_task(mut pins: OutputPins) {
    info!("Outputs task started");

    apply(&mut pins, Outputs::idle());

    loop {
        let cmd = OUTPUT_CMD.wait().await;
        apply(&mut pins, cmd);
    }
}

/// Apply a command snapshot through any output port
fn apply<O: OutputPort>(port: &mut O, cmd: Outputs) {
    port.set_drink(cmd.drink);
    port.set_change(cmd.change);
    port.set_alarm(cmd.alarm);
}
