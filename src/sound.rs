//! Melody tables for the speaker.
//!
//! Notes are (frequency, length in melody ticks). A frequency of 0 is a
//! rest. One tick is [`MELODY_TICK_MS`](crate::config::MELODY_TICK_MS).

use crate::config::MELODY_TICK_MS;

/// A single note or rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    pub hz: u16,
    pub ticks: u8,
}

impl Note {
    const fn new(hz: u16, ticks: u8) -> Self {
        Self { hz, ticks }
    }

    pub fn is_rest(&self) -> bool {
        self.hz == 0
    }

    pub fn duration_ms(&self) -> u32 {
        self.ticks as u32 * MELODY_TICK_MS as u32
    }
}

/// Built-in melodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Melody {
    /// Phase changes and end of timer.
    Funk,
    /// Sound toggled on.
    JumpUp,
}

const C2: u16 = 65;
const C3: u16 = 131;
const C5: u16 = 523;
const D5: u16 = 587;
const E5: u16 = 659;
const F5: u16 = 698;
const G5: u16 = 784;
const REST: u16 = 0;

static FUNK: [Note; 12] = [
    Note::new(C2, 2),
    Note::new(C2, 2),
    Note::new(C3, 1),
    Note::new(REST, 1),
    Note::new(C2, 1),
    Note::new(REST, 1),
    Note::new(C2, 2),
    Note::new(C2, 2),
    Note::new(C3, 1),
    Note::new(REST, 1),
    Note::new(C2, 1),
    Note::new(REST, 1),
];

static JUMP_UP: [Note; 5] = [
    Note::new(C5, 1),
    Note::new(D5, 1),
    Note::new(E5, 1),
    Note::new(F5, 1),
    Note::new(G5, 1),
];

impl Melody {
    pub fn notes(self) -> &'static [Note] {
        match self {
            Melody::Funk => &FUNK,
            Melody::JumpUp => &JUMP_UP,
        }
    }

    pub fn duration_ms(self) -> u32 {
        self.notes().iter().map(Note::duration_ms).sum()
    }
}
