//! Tagged input events and the single dispatch point.

use super::effects::Effects;
use super::Pomodoro;

/// Everything that can drive the timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Increase the target duration (stopped only).
    ButtonAPress,
    /// Switch the adjustment step (stopped only).
    ButtonALongPress,
    /// Start / pause.
    ButtonBPress,
    /// Stop and reset the countdown.
    ButtonBLongPress,
    /// Switch between work and rest.
    ButtonABPress,
    /// Toggle sound.
    ButtonABLongPress,
    /// One second elapsed.
    Tick,
}

impl Pomodoro {
    /// Route an event to its handler.
    pub fn handle(&mut self, event: Event) -> Effects {
        match event {
            Event::ButtonAPress => self.increment_minutes(),
            Event::ButtonALongPress => self.toggle_step(),
            Event::ButtonBPress => self.toggle_run(),
            Event::ButtonBLongPress => self.stop(),
            Event::ButtonABPress => self.toggle_phase(),
            Event::ButtonABLongPress => self.toggle_sound(),
            Event::Tick => self.tick(),
        }
    }
}
