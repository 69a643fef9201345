//! Fixed 5×5 patterns shown as feedback.

use super::Frame;
use heapless::Vec;

/// Patterns the timer can show in place of the countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    /// Hollow square confirming a stop.
    Check,
    /// Cross shown when the timer ends.
    No,
    /// Two bars pulsed while paused.
    Pause,
    /// Middle row: adjustment step is 5 minutes.
    StepFive,
    /// Centre dot: adjustment step is 1 minute.
    StepOne,
    /// Single decimal digit (values above 9 wrap).
    Digit(u8),
}

impl Glyph {
    pub fn frame(self) -> Frame {
        match self {
            Glyph::Check => Frame::from_rows([0b00000, 0b01110, 0b01010, 0b01110, 0b00000]),
            Glyph::No => Frame::from_rows([0b10001, 0b01010, 0b00100, 0b01010, 0b10001]),
            Glyph::Pause => Frame::from_rows([0b00000, 0b01010, 0b01010, 0b01010, 0b00000]),
            Glyph::StepFive => Frame::from_rows([0b00000, 0b00000, 0b11111, 0b00000, 0b00000]),
            Glyph::StepOne => Frame::from_rows([0b00000, 0b00000, 0b00100, 0b00000, 0b00000]),
            Glyph::Digit(d) => Frame::from_rows(DIGITS[(d % 10) as usize]),
        }
    }
}

const DIGITS: [[u8; 5]; 10] = [
    [0b01100, 0b10010, 0b10010, 0b10010, 0b01100],
    [0b00100, 0b01100, 0b00100, 0b00100, 0b01110],
    [0b11100, 0b00010, 0b01100, 0b10000, 0b11110],
    [0b11110, 0b00010, 0b00100, 0b10010, 0b01100],
    [0b00110, 0b01010, 0b10010, 0b11111, 0b00010],
    [0b11111, 0b10000, 0b11110, 0b00001, 0b11110],
    [0b00010, 0b00100, 0b01110, 0b10001, 0b01110],
    [0b11111, 0b00010, 0b00100, 0b01000, 0b10000],
    [0b01110, 0b10001, 0b01110, 0b10001, 0b01110],
    [0b01110, 0b10001, 0b01110, 0b00100, 0b01000],
];

/// Decimal digits of `n`, most significant first.
pub fn digits(n: u8) -> Vec<u8, 3> {
    let mut out: Vec<u8, 3> = Vec::new();
    let mut rest = n;
    loop {
        let _ = out.push(rest % 10);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    out.reverse();
    out
}
