//! Side effects requested by the timer core.
//!
//! Transitions never touch hardware. They return an ordered list of
//! effects and the executor in `main.rs` plays them against the display
//! and speaker in that order.

use crate::matrix::{Coord, Frame, Glyph};
use crate::sound::Melody;
use heapless::Vec;

/// Upper bound on effects emitted by a single event.
pub const MAX_EFFECTS: usize = 16;

/// Ordered effects produced by one event.
pub type Effects = Vec<Effect, MAX_EFFECTS>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    /// Replace the whole display (countdown render).
    ShowFrame(Frame),
    /// Invert one LED of whatever is currently shown.
    ToggleCell(Coord),
    /// Show a fixed pattern and hold it briefly.
    ShowGlyph(Glyph),
    /// Numeric readout, digit by digit.
    ShowNumber(u8),
    /// Fade brightness to zero over the given milliseconds.
    FadeOut(u16),
    /// Fade brightness back to full over the given milliseconds.
    FadeIn(u16),
    /// `times + 1` fade-out/fade-in cycles.
    Blink(u8),
    /// Start a melody in the background.
    PlayMelody(Melody),
    /// Start a single tone in the background.
    PlayTone { hz: u16, ms: u16 },
}

pub(crate) fn emit(effects: &mut Effects, effect: Effect) {
    // Capacity covers the longest transition chain (tick + phase change).
    let _ = effects.push(effect);
}

pub(crate) fn append(effects: &mut Effects, more: Effects) {
    for effect in more {
        emit(effects, effect);
    }
}
