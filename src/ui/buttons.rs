//! GPIO button input.
//!
//! Two physical buttons (active-low, external pull-ups on the board):
//!   - A - adjust duration / switch step
//!   - B - start, pause, stop
//!   - A+B together - switch phase / toggle sound
//!
//! The task sleeps on a GPIO edge while idle, then samples both buttons
//! every few milliseconds until the gesture ends and posts one `Event`
//! to the dispatch channel.

use defmt::{info, warn};
use embassy_futures::select::select;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Instant, Ticker};
use pomodoro_matrix::config::{BUTTON_POLL_MS, EVENT_QUEUE_DEPTH};
use pomodoro_matrix::ui::input_logic::PressTracker;
use pomodoro_matrix::{Error, Event};

pub type EventSender = Sender<'static, CriticalSectionRawMutex, Event, EVENT_QUEUE_DEPTH>;

#[embassy_executor::task]
pub async fn button_task(a: AnyPin, b: AnyPin, tx: EventSender) -> ! {
    let mut btn_a = Input::new(a, Pull::Up);
    let mut btn_b = Input::new(b, Pull::Up);
    let mut tracker = PressTracker::new();

    loop {
        // Idle: wait for either button to go down.
        select(btn_a.wait_for_low(), btn_b.wait_for_low()).await;

        let mut ticker = Ticker::every(Duration::from_millis(BUTTON_POLL_MS));
        loop {
            let now = Instant::now().as_millis();
            if let Some(event) = tracker.update(now, btn_a.is_low(), btn_b.is_low()) {
                info!("Button: {}", event);
                if let Err(e) = post(&tx, event) {
                    warn!("Button: {} dropped: {}", event, e);
                }
            }
            if !tracker.is_pressed() {
                break;
            }
            ticker.next().await;
        }
    }
}

fn post(tx: &EventSender, event: Event) -> Result<(), Error> {
    tx.try_send(event).map_err(|_| Error::EventQueueFull)
}
