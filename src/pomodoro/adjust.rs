//! Manual duration adjustment before the timer is started.

use super::effects::{emit, Effect, Effects};
use super::{MinuteStep, Pomodoro, RunState};
use crate::config::{BLINK_TIMES, MAX_ALLOWED_MINUTES, MAX_STEP};
use crate::matrix::Glyph;

impl Pomodoro {
    /// Add one step to the target duration.
    ///
    /// With the 5-minute step an odd value is first rounded up to the
    /// next multiple of 5. Past [`MAX_ALLOWED_MINUTES`] the target wraps
    /// back to one step.
    pub fn increment_minutes(&mut self) -> Effects {
        let mut effects = Effects::new();
        if self.run != RunState::Stopped {
            return effects;
        }

        let step = self.step.minutes();
        self.minutes = if self.minutes >= MAX_ALLOWED_MINUTES {
            step
        } else {
            let rem = self.minutes % MAX_STEP;
            if rem > 0 && step == MAX_STEP {
                self.minutes + (MAX_STEP - rem)
            } else {
                self.minutes + step
            }
        };
        self.remaining = self.minutes;
        self.render(&mut effects);
        effects
    }

    /// Switch between the 1- and 5-minute step and show which one is active.
    pub fn toggle_step(&mut self) -> Effects {
        let mut effects = Effects::new();
        if self.run != RunState::Stopped {
            return effects;
        }

        self.step = self.step.toggled();
        let glyph = match self.step {
            MinuteStep::Five => Glyph::StepFive,
            MinuteStep::One => Glyph::StepOne,
        };
        emit(&mut effects, Effect::ShowGlyph(glyph));
        emit(&mut effects, Effect::Blink(BLINK_TIMES));
        self.render(&mut effects);
        effects
    }
}
