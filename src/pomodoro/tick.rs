//! Once-per-second countdown step.

use super::effects::{append, emit, Effect, Effects};
use super::{Pomodoro, RunState};
use crate::config::{PAUSE_FADE_IN_MS, PAUSE_FADE_OUT_MS, SECONDS_PER_MINUTE};
use crate::matrix::Glyph;

impl Pomodoro {
    /// Advance the countdown by one second.
    ///
    /// While running: blink the last lit cell, drop a minute every
    /// [`SECONDS_PER_MINUTE`] ticks and switch phase when nothing is left.
    /// While paused: pulse the pause glyph.
    pub fn tick(&mut self) -> Effects {
        let mut effects = Effects::new();

        if self.run == RunState::Running {
            self.elapsed_secs += 1;

            // Nothing lit at zero, so no blink cue.
            if let Some(cell) = self.table.blink_cell(self.remaining) {
                emit(&mut effects, Effect::ToggleCell(cell));
            }

            if self.elapsed_secs >= SECONDS_PER_MINUTE {
                self.elapsed_secs = 0;
                self.remaining = self.remaining.saturating_sub(1);
                self.render(&mut effects);
            }

            if self.remaining == 0 {
                append(&mut effects, self.toggle_phase());
            }
        }

        if self.run == RunState::Paused {
            emit(&mut effects, Effect::FadeOut(PAUSE_FADE_OUT_MS));
            emit(&mut effects, Effect::ShowGlyph(Glyph::Pause));
            emit(&mut effects, Effect::FadeIn(PAUSE_FADE_IN_MS));
        }

        effects
    }
}
