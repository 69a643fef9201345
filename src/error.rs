//! Unified error type for pomodoro-matrix.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! The timer core itself is total; these errors come from the I/O shims.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Display
    /// A plot/toggle addressed a cell outside the LED matrix.
    CellOutOfRange { x: u8, y: u8 },

    // Input
    /// The event queue was full; the gesture was dropped.
    EventQueueFull,
}
