//! Button gesture classification.
//!
//! The polling task samples both buttons and feeds the levels in here.
//! A gesture starts when the first button goes down and ends when both
//! are up again; it is then reported as exactly one [`Event`]:
//!
//! - both buttons were down at some point → A+B gesture
//! - held for at least [`LONG_PRESS_MS`] → long variant
//! - shorter than [`BUTTON_DEBOUNCE_MS`] → ignored as bounce

use crate::config::{BUTTON_DEBOUNCE_MS, LONG_PRESS_MS};
use crate::pomodoro::Event;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PressTracker {
    started_ms: Option<u64>,
    saw_a: bool,
    saw_b: bool,
}

impl PressTracker {
    pub const fn new() -> Self {
        Self {
            started_ms: None,
            saw_a: false,
            saw_b: false,
        }
    }

    /// Feed one sample. Returns the gesture once all buttons are released.
    pub fn update(&mut self, now_ms: u64, a_down: bool, b_down: bool) -> Option<Event> {
        if a_down || b_down {
            if self.started_ms.is_none() {
                self.started_ms = Some(now_ms);
            }
            self.saw_a |= a_down;
            self.saw_b |= b_down;
            return None;
        }

        let started = self.started_ms?;
        let held = now_ms.saturating_sub(started);
        let (a, b) = (self.saw_a, self.saw_b);
        *self = Self::new();

        if held < BUTTON_DEBOUNCE_MS {
            return None;
        }
        Some(classify(a, b, held >= LONG_PRESS_MS))
    }

    /// `true` while a gesture is in progress.
    pub fn is_pressed(&self) -> bool {
        self.started_ms.is_some()
    }
}

fn classify(a: bool, b: bool, long: bool) -> Event {
    match (a && b, a, long) {
        (true, _, false) => Event::ButtonABPress,
        (true, _, true) => Event::ButtonABLongPress,
        (false, true, false) => Event::ButtonAPress,
        (false, true, true) => Event::ButtonALongPress,
        (false, false, false) => Event::ButtonBPress,
        (false, false, true) => Event::ButtonBLongPress,
    }
}
