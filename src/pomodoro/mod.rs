//! Pomodoro timer core - run state machine, phase cycle and tick handling.
//!
//! A single [`Pomodoro`] owns all timer state. Every operation mutates it
//! in place and returns the [`Effects`] the caller must perform; nothing
//! in here touches hardware, so the whole cycle runs on the host.
//!
//! ## Operations
//!
//! - **Run state**: [`start`](Pomodoro::start), [`pause`](Pomodoro::pause),
//!   [`stop`](Pomodoro::stop), [`toggle_run`](Pomodoro::toggle_run)
//! - **Phase cycle**: [`enter_work_mode`](Pomodoro::enter_work_mode),
//!   [`enter_rest_mode`](Pomodoro::enter_rest_mode),
//!   [`end_timer`](Pomodoro::end_timer)
//! - **Countdown**: [`tick`](Pomodoro::tick), once per second
//! - **Adjustment**: [`increment_minutes`](Pomodoro::increment_minutes),
//!   [`toggle_step`](Pomodoro::toggle_step)
//!
//! Transitions requested from a state where they make no sense are
//! no-ops returning no effects.

mod adjust;
pub mod effects;
pub mod event;
mod phase;
pub mod state;
mod tick;


pub use effects::{Effect, Effects};
pub use event::Event;
pub use state::{MinuteStep, Phase, RunState};

use crate::config::{BLINK_TIMES, END_BLINK_TIMES, STOP_TONE_HZ, STOP_TONE_MS, WORKTIME};
use crate::matrix::{CoordinateTable, Glyph};
use crate::sound::Melody;
use effects::{append, emit};

/// Complete timer state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pomodoro {
    run: RunState,
    phase: Phase,
    /// Completed work intervals since the last long break.
    cycle: u8,
    /// Target length of the current interval.
    minutes: u8,
    remaining: u8,
    /// Seconds into the current minute, `0..60`.
    elapsed_secs: u8,
    step: MinuteStep,
    sound_enabled: bool,
    table: CoordinateTable,
}

impl Pomodoro {
    /// Stopped, working phase, full work duration, sound off.
    pub fn new() -> Self {
        Self {
            run: RunState::Stopped,
            phase: Phase::Working,
            cycle: 0,
            minutes: WORKTIME,
            remaining: WORKTIME,
            elapsed_secs: 0,
            step: MinuteStep::Five,
            sound_enabled: false,
            table: CoordinateTable::new(),
        }
    }

    /// Power-on sequence: reset the display, then begin the first work interval.
    pub fn boot(&mut self) -> Effects {
        let mut effects = self.reset();
        append(&mut effects, self.enter_work_mode());
        effects
    }

    pub fn run_state(&self) -> RunState {
        self.run
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cycle(&self) -> u8 {
        self.cycle
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn remaining_minutes(&self) -> u8 {
        self.remaining
    }

    pub fn elapsed_secs(&self) -> u8 {
        self.elapsed_secs
    }

    pub fn minute_step(&self) -> MinuteStep {
        self.step
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn table(&self) -> &CoordinateTable {
        &self.table
    }

    /// Legal from `Stopped` or `Paused`. Renders the countdown first.
    pub fn start(&mut self) -> Effects {
        let mut effects = Effects::new();
        if self.run == RunState::Running {
            return effects;
        }
        self.render(&mut effects);
        self.run = RunState::Running;
        effects
    }

    /// Legal from `Running`. The display keeps its last frame; the paused
    /// pulse is driven by [`tick`](Self::tick).
    pub fn pause(&mut self) -> Effects {
        if self.run == RunState::Running {
            self.run = RunState::Paused;
        }
        Effects::new()
    }

    /// Legal from `Running` or `Paused`. Confirms, then resets the
    /// countdown to the full target.
    pub fn stop(&mut self) -> Effects {
        let mut effects = Effects::new();
        if self.run == RunState::Stopped {
            return effects;
        }
        self.run = RunState::Stopped;
        emit(&mut effects, Effect::ShowGlyph(Glyph::Check));
        self.tone(&mut effects, STOP_TONE_HZ, STOP_TONE_MS);
        emit(&mut effects, Effect::Blink(BLINK_TIMES));
        append(&mut effects, self.reset());
        effects
    }

    pub fn toggle_run(&mut self) -> Effects {
        if self.run != RunState::Running {
            self.start()
        } else {
            self.pause()
        }
    }

    /// Stop for good: distinct melody and icon, then back to defaults.
    ///
    /// Phases only ever alternate, so the tick handler never gets here;
    /// this is the explicit terminal operation.
    pub fn end_timer(&mut self) -> Effects {
        let mut effects = Effects::new();
        self.run = RunState::Stopped;
        self.melody(&mut effects, Melody::Funk);
        emit(&mut effects, Effect::ShowGlyph(Glyph::No));
        emit(&mut effects, Effect::Blink(END_BLINK_TIMES));
        append(&mut effects, self.reset());
        effects
    }

    /// Flip the sound flag and show the new value as 0/1.
    pub fn toggle_sound(&mut self) -> Effects {
        let mut effects = Effects::new();
        self.sound_enabled = !self.sound_enabled;
        emit(&mut effects, Effect::ShowNumber(self.sound_enabled as u8));
        self.melody(&mut effects, Melody::JumpUp);
        emit(&mut effects, Effect::Blink(BLINK_TIMES));
        self.render(&mut effects);
        effects
    }

    /// Back to `Stopped` with a full countdown for the current target.
    fn reset(&mut self) -> Effects {
        let mut effects = Effects::new();
        self.run = RunState::Stopped;
        self.remaining = self.minutes;
        self.elapsed_secs = 0;
        self.render(&mut effects);
        effects
    }

    fn render(&self, effects: &mut Effects) {
        emit(effects, Effect::ShowFrame(self.table.countdown_frame(self.remaining)));
    }

    fn melody(&self, effects: &mut Effects, melody: Melody) {
        if self.sound_enabled {
            emit(effects, Effect::PlayMelody(melody));
        }
    }

    fn tone(&self, effects: &mut Effects, hz: u16, ms: u16) {
        if self.sound_enabled {
            emit(effects, Effect::PlayTone { hz, ms });
        }
    }
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self::new()
    }
}
