//! Obol - Drinks Vending Machine Firmware
//!
//! Main firmware binary for RP2040-based vending machine controllers.
//!
//! Named after the obol, the small Greek coin - fitting for a machine whose
//! whole job is counting coins and handing the right ones back.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use {defmt_rtt as _, panic_probe as _};

use crate::display::{Hd44780, LcdPins};
use crate::tasks::{InputPins, OutputPins};

mod channels;
mod display;
mod tasks;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Obol firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Front panel buttons and coin switches (active high, external pull-downs
    // are not fitted, so use the internal ones)
    let inputs = InputPins {
        next_drink: Input::new(p.PIN_2, Pull::Down),
        select: Input::new(p.PIN_3, Pull::Down),
        coin_10: Input::new(p.PIN_4, Pull::Down),
        coin_20: Input::new(p.PIN_5, Pull::Down),
        coin_50: Input::new(p.PIN_6, Pull::Down),
    };

    // Actuator lines
    let outputs = OutputPins {
        drink: Output::new(p.PIN_10, Level::Low),
        change: Output::new(p.PIN_11, Level::Low),
        alarm: Output::new(p.PIN_12, Level::Low),
    };

    // 16x2 character LCD in 4-bit mode
    let lcd = Hd44780::new(LcdPins {
        rs: Output::new(p.PIN_16, Level::Low),
        en: Output::new(p.PIN_17, Level::Low),
        d4: Output::new(p.PIN_18, Level::Low),
        d5: Output::new(p.PIN_19, Level::Low),
        d6: Output::new(p.PIN_20, Level::Low),
        d7: Output::new(p.PIN_21, Level::Low),
    });
    info!("LCD initialized");

    // Tilt sensor on ADC0
    let adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());
    let tilt_channel = Channel::new_pin(p.PIN_26, Pull::None);
    info!("ADC initialized");

    // Spawn tasks
    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::input_task(inputs)).unwrap();
    spawner.spawn(tasks::tilt_task(adc, tilt_channel)).unwrap();
    spawner.spawn(tasks::outputs_task(outputs)).unwrap();
    spawner.spawn(tasks::display_task(lcd)).unwrap();
    spawner.spawn(tasks::controller_task()).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
