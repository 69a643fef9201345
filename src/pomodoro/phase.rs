//! Work/rest cycle.

use super::effects::{emit, Effect, Effects};
use super::{Phase, Pomodoro};
use crate::config::{BLINK_TIMES, LONGBREAK, POMODOROS, SHORTBREAK, WORKTIME};
use crate::sound::Melody;

impl Pomodoro {
    /// Begin a work interval and count it towards the long break.
    pub fn enter_work_mode(&mut self) -> Effects {
        let mut effects = Effects::new();
        self.melody(&mut effects, Melody::Funk);
        self.cycle = self.cycle.saturating_add(1).min(POMODOROS);
        self.phase = Phase::Working;
        self.minutes = WORKTIME;
        self.remaining = WORKTIME;
        emit(&mut effects, Effect::ShowNumber(self.cycle));
        emit(&mut effects, Effect::Blink(BLINK_TIMES));
        self.render(&mut effects);
        effects
    }

    /// Begin a break. The break after the `POMODOROS`-th work interval is
    /// the long one and restarts the count.
    pub fn enter_rest_mode(&mut self) -> Effects {
        let mut effects = Effects::new();
        self.melody(&mut effects, Melody::Funk);
        self.phase = Phase::Resting;
        if self.cycle == POMODOROS {
            self.cycle = 0;
            self.minutes = LONGBREAK;
        } else {
            self.minutes = SHORTBREAK;
        }
        self.remaining = self.minutes;
        self.render(&mut effects);
        effects
    }

    /// Switch to the other phase. Used by the A+B button and when an
    /// interval runs out.
    pub fn toggle_phase(&mut self) -> Effects {
        match self.phase {
            Phase::Working => self.enter_rest_mode(),
            Phase::Resting => self.enter_work_mode(),
        }
    }
}
