//! Countdown-to-pixel mapping.
//!
//! The table enumerates the grid once in row-major order:
//! ```text
//! (0,0) (1,0) (2,0) (3,0) (4,0)
//! (0,1) (1,1) ...
//! ```
//! Showing `n` remaining minutes lights the first `n` entries, so the
//! display for `k` minutes is always a subset of the display for `k + 1`.

use super::{Coord, Frame};
use crate::config::{CELL_COUNT, GRID_HEIGHT, GRID_WIDTH};

/// Fixed ordered sequence of every matrix cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoordinateTable {
    cells: [Coord; CELL_COUNT],
}

impl CoordinateTable {
    /// Enumerate the whole grid row-major.
    pub fn new() -> Self {
        let mut cells = [Coord::new(0, 0); CELL_COUNT];
        let coords = (0..GRID_HEIGHT).flat_map(|y| (0..GRID_WIDTH).map(move |x| Coord::new(x, y)));
        for (slot, coord) in cells.iter_mut().zip(coords) {
            *slot = coord;
        }
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Coord> {
        self.cells.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// Frame with the first `remaining` cells lit.
    ///
    /// `remaining` is clamped to the table length.
    pub fn countdown_frame(&self, remaining: u8) -> Frame {
        let mut frame = Frame::empty();
        for cell in self.cells.iter().take(self.clamp(remaining)) {
            // Every table entry lies inside the grid.
            let _ = frame.plot(cell.x, cell.y);
        }
        frame
    }

    /// Last lit cell for `remaining` minutes, blinked once per second.
    ///
    /// `None` when nothing is lit (countdown already at zero).
    pub fn blink_cell(&self, remaining: u8) -> Option<Coord> {
        match self.clamp(remaining) {
            0 => None,
            n => self.get(n - 1),
        }
    }

    fn clamp(&self, remaining: u8) -> usize {
        (remaining as usize).min(self.cells.len())
    }
}

impl Default for CoordinateTable {
    fn default() -> Self {
        Self::new()
    }
}
