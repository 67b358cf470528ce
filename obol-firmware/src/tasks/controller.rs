//! Main controller task
//!
//! The single reactor driving the vending machine core. Receives input
//! events, tick signals, and tilt readings, applies them to the
//! [`VendingMachine`], and publishes output commands and screen updates.
//! Because every mutation happens inside this one task, the core needs no
//! locking.

use defmt::*;
use embassy_futures::select::{select3, Either3};

use obol_core::config::Timings;
use obol_core::state::Event;
use obol_core::vend::VendingMachine;

use crate::channels::{EVENT_CHANNEL, INPUT_CHANNEL, OUTPUT_CMD, SCREEN_UPDATE, TILT_READING};
use crate::display::Renderer;
use crate::tasks::display::SCREEN_BUFFER;
use crate::tasks::tick::TICK_SIGNAL;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task() {
    info!("Controller task started");

    let mut vm = VendingMachine::new(Timings::default());
    let mut renderer = Renderer::new();

    // Show the menu and settle the outputs before the first event
    renderer.render(&vm);
    update_screen_buffer(&renderer).await;
    OUTPUT_CMD.signal(vm.outputs());

    loop {
        let (event, ticked) = match select3(
            INPUT_CHANNEL.receive(),
            TICK_SIGNAL.wait(),
            TILT_READING.wait(),
        )
        .await
        {
            Either3::First(input) => (vm.handle_input(input), false),
            Either3::Second(()) => (vm.tick(), true),
            Either3::Third(reading) => (vm.sample_tilt(reading), false),
        };

        let Some(event) = event else {
            // Quiet ticks still move the progress bar and the coin-eject
            // line; the alarm flash rides on tilt samples
            if (ticked && vm.mode().is_dispensing()) || vm.alarm_active() {
                render_and_publish(&vm, &mut renderer).await;
            }
            continue;
        };

        log_event(event);

        // Non-blocking: the event log is best effort
        let _ = EVENT_CHANNEL.try_send(event);

        OUTPUT_CMD.signal(vm.outputs());
        render_and_publish(&vm, &mut renderer).await;
    }
}

fn log_event(event: Event) {
    match event {
        Event::TiltRaised => warn!("Tilt alarm raised"),
        Event::TiltCleared => info!("Tilt alarm cleared"),
        _ => info!("Event: {:?}", event),
    }
}

async fn render_and_publish(vm: &VendingMachine, renderer: &mut Renderer) {
    renderer.render(vm);
    update_screen_buffer(renderer).await;
}

async fn update_screen_buffer(renderer: &Renderer) {
    {
        let mut buffer = SCREEN_BUFFER.lock().await;
        *buffer = renderer.screen().clone();
    }
    SCREEN_UPDATE.signal(());
}
