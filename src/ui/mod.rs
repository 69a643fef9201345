//! User interface subsystem - LED matrix + physical buttons.
//!
//! The dispatch loop in `main.rs` owns the timer; this module only moves
//! pixels and button levels between it and the hardware.
//!
//! ## Components
//!
//! - **Display**: micro:bit v2 5×5 LED matrix, row-multiplexed over GPIO
//! - **Buttons**: A and B (active-low), classified into press / long-press
//!   / combined gestures by [`pomodoro_matrix::ui::input_logic`]

pub mod buttons;
pub mod display;
