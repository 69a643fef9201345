//! Run state, phase and adjustment step.

use crate::config::{MAX_STEP, MIN_STEP};

/// Whether the countdown advances on ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunState {
    Stopped,
    Running,
    Paused,
}

/// Which interval is being timed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Working,
    Resting,
}

/// Granularity of manual duration adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MinuteStep {
    One,
    Five,
}

impl MinuteStep {
    pub fn minutes(self) -> u8 {
        match self {
            MinuteStep::One => MIN_STEP,
            MinuteStep::Five => MAX_STEP,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            MinuteStep::One => MinuteStep::Five,
            MinuteStep::Five => MinuteStep::One,
        }
    }
}
