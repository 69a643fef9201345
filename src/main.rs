//! pomodoro-matrix firmware entry point (micro:bit v2).
//!
//! Task layout:
//!
//! ```text
//!   tick_task ──┐
//!               ├─ EVENTS (channel) ─► main dispatch loop ─► Display
//!   button_task ┘                        (owns Pomodoro)    └► audio_task
//!   refresh_task  scans the current frame onto the matrix
//! ```
//!
//! Every event is handled to completion before the next one is received,
//! so the timer state needs no locking.

#![no_std]
#![no_main]

mod audio;
mod ui;

use defmt::info;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive, Pin};
use embassy_nrf::pwm::SimplePwm;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Ticker};
use pomodoro_matrix::config::{EVENT_QUEUE_DEPTH, TICK_INTERVAL_MS};
use pomodoro_matrix::{Effect, Effects, Event, Pomodoro};
use {defmt_rtt as _, panic_probe as _};

use crate::audio::AudioRequest;
use crate::ui::buttons::EventSender;
use crate::ui::display::{Display, MatrixPins};

/// Single serialization point for ticks and button gestures.
static EVENTS: Channel<CriticalSectionRawMutex, Event, EVENT_QUEUE_DEPTH> = Channel::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("pomodoro-matrix starting");

    let pins = MatrixPins {
        rows: [
            row(p.P0_21.degrade()),
            row(p.P0_22.degrade()),
            row(p.P0_15.degrade()),
            row(p.P0_24.degrade()),
            row(p.P0_19.degrade()),
        ],
        cols: [
            col(p.P0_28.degrade()),
            col(p.P0_11.degrade()),
            col(p.P0_31.degrade()),
            col(p.P1_05.degrade()),
            col(p.P0_30.degrade()),
        ],
    };

    spawner.must_spawn(ui::display::refresh_task(pins));
    spawner.must_spawn(ui::buttons::button_task(
        p.P0_14.degrade(),
        p.P0_23.degrade(),
        EVENTS.sender(),
    ));
    spawner.must_spawn(audio::audio_task(SimplePwm::new_1ch(p.PWM0, p.P0_00)));
    spawner.must_spawn(tick_task(EVENTS.sender()));

    let mut timer = Pomodoro::new();
    let mut display = Display::new();

    perform(&mut display, timer.boot()).await;
    info!("Timer: ready, cycle {}", timer.cycle());

    loop {
        let event = EVENTS.receive().await;
        let (run, phase) = (timer.run_state(), timer.phase());

        let effects = timer.handle(event);

        if event != Event::Tick {
            info!("Event: {}", event);
        }
        if timer.run_state() != run {
            info!("Timer: {} -> {}", run, timer.run_state());
        }
        if timer.phase() != phase {
            info!(
                "Timer: {} -> {} ({} min, cycle {})",
                phase,
                timer.phase(),
                timer.minutes(),
                timer.cycle()
            );
        }

        perform(&mut display, effects).await;
    }
}

/// Matrix anode, off until the refresh task selects the row.
fn row(pin: AnyPin) -> Output<'static> {
    Output::new(pin, Level::Low, OutputDrive::Standard)
}

/// Matrix cathode, high (off) by default.
fn col(pin: AnyPin) -> Output<'static> {
    Output::new(pin, Level::High, OutputDrive::Standard)
}

/// Nominal 1 Hz tick. Waits for queue space rather than dropping ticks.
#[embassy_executor::task]
async fn tick_task(tx: EventSender) -> ! {
    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));
    loop {
        ticker.next().await;
        tx.send(Event::Tick).await;
    }
}

/// Play effects against the display and speaker, in order.
async fn perform(display: &mut Display, effects: Effects) {
    for effect in effects {
        match effect {
            Effect::ShowFrame(frame) => display.show(frame),
            Effect::ToggleCell(cell) => display.toggle(cell),
            Effect::ShowGlyph(glyph) => display.show_glyph(glyph).await,
            Effect::ShowNumber(n) => display.show_number(n).await,
            Effect::FadeOut(ms) => display.fade_out(ms).await,
            Effect::FadeIn(ms) => display.fade_in(ms).await,
            Effect::Blink(times) => display.blink(times).await,
            Effect::PlayMelody(melody) => audio::play(AudioRequest::Melody(melody)),
            Effect::PlayTone { hz, ms } => audio::play(AudioRequest::Tone { hz, ms }),
        }
    }
}
