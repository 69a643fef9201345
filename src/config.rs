//! Application-wide constants and compile-time configuration.
//!
//! Phase durations, matrix geometry, input timing and feedback timing
//! all live here so they can be tuned in one place.

// Pomodoro cycle

/// Length of a work interval (minutes).
pub const WORKTIME: u8 = 25;

/// Length of a regular break (minutes).
pub const SHORTBREAK: u8 = 5;

/// Length of the break earned after `POMODOROS` work intervals (minutes).
pub const LONGBREAK: u8 = 20;

/// Completed work intervals before the next break is a long one.
pub const POMODOROS: u8 = 4;

// Manual duration adjustment

/// Upper bound for a manually set duration; the next increment wraps.
pub const MAX_ALLOWED_MINUTES: u8 = 25;

/// Fine adjustment step (minutes).
pub const MIN_STEP: u8 = 1;

/// Coarse adjustment step (minutes). Also the width of the step glyph.
pub const MAX_STEP: u8 = 5;

// LED matrix

/// Matrix columns.
pub const GRID_WIDTH: u8 = 5;

/// Matrix rows.
pub const GRID_HEIGHT: u8 = 5;

/// Number of addressable cells; one lit cell per remaining minute.
pub const CELL_COUNT: usize = GRID_WIDTH as usize * GRID_HEIGHT as usize;

// Rows are stored as bitmasks in a `u8`.
const _: () = assert!(GRID_WIDTH <= 8);

// Timing

/// Nominal period of the countdown tick (ms).
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Ticks that make up one countdown minute.
pub const SECONDS_PER_MINUTE: u8 = 60;

/// Button sampling period (ms).
pub const BUTTON_POLL_MS: u64 = 10;

/// Gestures shorter than this are treated as contact bounce (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Hold time after which a gesture counts as a long press (ms).
pub const LONG_PRESS_MS: u64 = 1000;

/// Depth of the event queue shared by the tick source and the buttons.
pub const EVENT_QUEUE_DEPTH: usize = 8;

// Visual feedback

/// Default blink count used after mode changes and confirmations.
pub const BLINK_TIMES: u8 = 3;

/// Blink count after the timer ends.
pub const END_BLINK_TIMES: u8 = 5;

/// Fade-out / fade-in lengths of one blink cycle (ms).
pub const BLINK_FADE_OUT_MS: u16 = 300;
pub const BLINK_FADE_IN_MS: u16 = 500;

/// Fade-out / fade-in lengths of the pulse shown every tick while paused (ms).
pub const PAUSE_FADE_OUT_MS: u16 = 100;
pub const PAUSE_FADE_IN_MS: u16 = 300;

/// How long a glyph stays up before the next effect runs (ms).
pub const GLYPH_HOLD_MS: u64 = 400;

/// How long each digit of a numeric readout is shown (ms).
pub const DIGIT_HOLD_MS: u64 = 500;

/// Gap between digits of a numeric readout (ms).
pub const DIGIT_GAP_MS: u64 = 100;

/// Time each matrix row is driven during one refresh pass (µs).
/// 5 rows × 2 ms gives a 100 Hz frame rate.
pub const ROW_PERIOD_US: u64 = 2000;

/// Brightness steps used when fading.
pub const FADE_STEPS: u8 = 16;

// Audio

/// One melody tick: a sixteenth note at 120 bpm (ms).
pub const MELODY_TICK_MS: u16 = 125;

/// Confirmation tone played when the timer is stopped.
pub const STOP_TONE_HZ: u16 = 880;
pub const STOP_TONE_MS: u16 = MELODY_TICK_MS;

// GPIO pin assignments (micro:bit v2)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.
//
//   Matrix rows (anodes)    → P0.21 P0.22 P0.15 P0.24 P0.19
//   Matrix cols (cathodes)  → P0.28 P0.11 P0.31 P1.05 P0.30
//   Button A                → P0.14
//   Button B                → P0.23
//   Speaker                 → P0.00 (PWM0)
