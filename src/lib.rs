//! Host-testable core of pomodoro-matrix.
//!
//! Everything with real logic lives here: the timer state machine, the
//! countdown-to-matrix mapping, glyphs, melodies and button gesture
//! classification. None of it touches hardware, so it is tested on the
//! host with `cargo test`.
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and links against this library for all timer logic. The hardware
//! shims (matrix refresh, button polling, speaker) live next to main.rs.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod matrix;
pub mod pomodoro;
pub mod sound;

// Only the pure half of the UI module is shared with the host; the
// display and button tasks are compiled into the binary alone.
#[path = "ui/input_logic.rs"]
mod ui_input_logic_impl;

pub mod ui {
    pub mod input_logic {
        pub use crate::ui_input_logic_impl::PressTracker;
    }
}

pub use error::Error;
pub use pomodoro::{Effect, Effects, Event, Pomodoro};
