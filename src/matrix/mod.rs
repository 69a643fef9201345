//! LED matrix model - frame buffer, countdown mapping and glyphs.
//!
//! Everything here is pure data; the embedded display task only copies
//! a [`Frame`] onto the row/column pins.
//!
//! ## Components
//!
//! - **Frame**: one bit per LED, row-major, `x = 0` is the left column
//! - **CoordinateTable**: maps "N remaining minutes" to N lit cells
//! - **Glyph**: fixed 5×5 patterns (icons, step indicators, digits)

pub mod glyph;
pub mod table;

pub use glyph::Glyph;
pub use table::CoordinateTable;

use crate::config::{GRID_HEIGHT, GRID_WIDTH};
use crate::error::Error;

/// A single LED position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// On/off state of every LED on the matrix.
///
/// Each row is a bitmask with the left-most column in the highest bit,
/// so a row literal like `0b01110` reads the same way it lights up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    rows: [u8; GRID_HEIGHT as usize],
}

impl Frame {
    /// All LEDs off.
    pub const fn empty() -> Self {
        Self {
            rows: [0; GRID_HEIGHT as usize],
        }
    }

    /// Build a frame from row bitmasks. Bits beyond the grid width are dropped.
    pub const fn from_rows(rows: [u8; GRID_HEIGHT as usize]) -> Self {
        let mut masked = rows;
        let mut y = 0;
        while y < masked.len() {
            masked[y] &= ROW_MASK;
            y += 1;
        }
        Self { rows: masked }
    }

    pub fn rows(&self) -> &[u8; GRID_HEIGHT as usize] {
        &self.rows
    }

    pub fn clear(&mut self) {
        self.rows = [0; GRID_HEIGHT as usize];
    }

    /// Light the LED at `(x, y)`.
    pub fn plot(&mut self, x: u8, y: u8) -> Result<(), Error> {
        let (row, bit) = Self::locate(x, y)?;
        self.rows[row] |= bit;
        Ok(())
    }

    /// Invert the LED at `(x, y)`.
    pub fn toggle(&mut self, x: u8, y: u8) -> Result<(), Error> {
        let (row, bit) = Self::locate(x, y)?;
        self.rows[row] ^= bit;
        Ok(())
    }

    /// `false` for cells outside the grid.
    pub fn is_lit(&self, x: u8, y: u8) -> bool {
        match Self::locate(x, y) {
            Ok((row, bit)) => self.rows[row] & bit != 0,
            Err(_) => false,
        }
    }

    pub fn lit_count(&self) -> usize {
        self.rows.iter().map(|r| r.count_ones() as usize).sum()
    }

    /// Whether column `x` of row `y` should be driven. Used by the refresh loop.
    pub fn row_has(&self, y: usize, x: usize) -> bool {
        x < GRID_WIDTH as usize
            && y < GRID_HEIGHT as usize
            && self.rows[y] & (1 << (GRID_WIDTH as usize - 1 - x)) != 0
    }

    fn locate(x: u8, y: u8) -> Result<(usize, u8), Error> {
        if x >= GRID_WIDTH || y >= GRID_HEIGHT {
            return Err(Error::CellOutOfRange { x, y });
        }
        Ok((y as usize, 1 << (GRID_WIDTH - 1 - x)))
    }
}

const ROW_MASK: u8 = ((1u16 << GRID_WIDTH) - 1) as u8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_lights_single_cell() {
        let mut frame = Frame::empty();
        frame.plot(0, 0).unwrap();
        frame.plot(4, 2).unwrap();
        assert!(frame.is_lit(0, 0));
        assert!(frame.is_lit(4, 2));
        assert!(!frame.is_lit(1, 0));
        assert_eq!(frame.rows()[0], 0b10000);
        assert_eq!(frame.rows()[2], 0b00001);
        assert_eq!(frame.lit_count(), 2);
    }

    #[test]
    fn toggle_twice_restores_frame() {
        let mut frame = Frame::from_rows([0b10101, 0, 0, 0, 0b11111]);
        let before = frame;
        frame.toggle(2, 0).unwrap();
        assert!(!frame.is_lit(2, 0));
        frame.toggle(2, 0).unwrap();
        assert_eq!(frame, before);
    }

    #[test]
    fn out_of_range_cells_are_rejected() {
        let mut frame = Frame::empty();
        assert_eq!(frame.plot(5, 0), Err(Error::CellOutOfRange { x: 5, y: 0 }));
        assert_eq!(frame.toggle(0, 9), Err(Error::CellOutOfRange { x: 0, y: 9 }));
        assert!(!frame.is_lit(7, 7));
        assert_eq!(frame, Frame::empty());
    }

    #[test]
    fn from_rows_masks_extra_columns() {
        let frame = Frame::from_rows([0xFF, 0, 0, 0, 0]);
        assert_eq!(frame.rows()[0], 0b11111);
        assert_eq!(frame.lit_count(), 5);
    }

    #[test]
    fn row_has_matches_is_lit() {
        let frame = Frame::from_rows([0, 0b01010, 0, 0, 0]);
        assert!(frame.row_has(1, 1));
        assert!(frame.row_has(1, 3));
        assert!(!frame.row_has(1, 2));
        assert!(!frame.row_has(1, 5));
        assert!(!frame.row_has(5, 0));
    }
}
