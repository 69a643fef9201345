//! LED matrix driver with brightness fades.
//!
//! The micro:bit v2 matrix is 5 row anodes × 5 column cathodes. The
//! refresh task lights one row at a time; brightness is the fraction of
//! each row slot the anode is driven. [`Display`] is the handle the
//! effect executor uses to change what is shown.

use core::cell::Cell;
use core::sync::atomic::{AtomicU8, Ordering};

use defmt::{debug, warn};
use embassy_nrf::gpio::Output;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::Timer;
use pomodoro_matrix::config::{
    BLINK_FADE_IN_MS, BLINK_FADE_OUT_MS, DIGIT_GAP_MS, DIGIT_HOLD_MS, FADE_STEPS, GLYPH_HOLD_MS,
    GRID_HEIGHT, GRID_WIDTH, ROW_PERIOD_US,
};
use pomodoro_matrix::matrix::glyph::digits;
use pomodoro_matrix::matrix::{Coord, Frame, Glyph};

const FULL: u8 = u8::MAX;

/// Frame currently scanned out by the refresh task.
static FRAME: Mutex<CriticalSectionRawMutex, Cell<Frame>> = Mutex::new(Cell::new(Frame::empty()));

/// Global brightness, 0 (dark) ..= 255 (full).
static BRIGHTNESS: AtomicU8 = AtomicU8::new(FULL);

/// Row and column pins of the matrix.
pub struct MatrixPins {
    /// Anodes, top to bottom. Driven high to light a row.
    pub rows: [Output<'static>; GRID_HEIGHT as usize],
    /// Cathodes, left to right. Driven low to light a column.
    pub cols: [Output<'static>; GRID_WIDTH as usize],
}

/// Scan the shared frame onto the matrix forever.
#[embassy_executor::task]
pub async fn refresh_task(mut pins: MatrixPins) -> ! {
    loop {
        let frame = FRAME.lock(|f| f.get());
        let on_us = ROW_PERIOD_US * BRIGHTNESS.load(Ordering::Relaxed) as u64 / FULL as u64;

        for (y, row) in pins.rows.iter_mut().enumerate() {
            for (x, col) in pins.cols.iter_mut().enumerate() {
                if frame.row_has(y, x) {
                    col.set_low();
                } else {
                    col.set_high();
                }
            }

            if on_us > 0 {
                row.set_high();
                Timer::after_micros(on_us).await;
                row.set_low();
            }
            if on_us < ROW_PERIOD_US {
                Timer::after_micros(ROW_PERIOD_US - on_us).await;
            }
        }
    }
}

/// Handle used by the effect executor.
pub struct Display {
    current: Frame,
}

impl Display {
    pub fn new() -> Self {
        Self {
            current: Frame::empty(),
        }
    }

    /// Replace the whole frame.
    pub fn show(&mut self, frame: Frame) {
        self.current = frame;
        FRAME.lock(|f| f.set(frame));
    }

    /// Invert one LED of the current frame.
    pub fn toggle(&mut self, cell: Coord) {
        let mut frame = self.current;
        match frame.toggle(cell.x, cell.y) {
            Ok(()) => self.show(frame),
            Err(e) => warn!("Display: toggle failed: {}", e),
        }
    }

    /// Show a glyph and hold it.
    pub async fn show_glyph(&mut self, glyph: Glyph) {
        debug!("Display: glyph {}", glyph);
        self.show(glyph.frame());
        Timer::after_millis(GLYPH_HOLD_MS).await;
    }

    /// Show a number one digit at a time.
    pub async fn show_number(&mut self, n: u8) {
        debug!("Display: number {}", n);
        for d in digits(n) {
            self.show(Glyph::Digit(d).frame());
            Timer::after_millis(DIGIT_HOLD_MS).await;
            self.show(Frame::empty());
            Timer::after_millis(DIGIT_GAP_MS).await;
        }
    }

    pub async fn fade_out(&mut self, ms: u16) {
        fade_to(0, ms).await;
    }

    pub async fn fade_in(&mut self, ms: u16) {
        fade_to(FULL, ms).await;
    }

    /// `times + 1` fade-out/fade-in cycles.
    pub async fn blink(&mut self, times: u8) {
        for _ in 0..=times {
            self.fade_out(BLINK_FADE_OUT_MS).await;
            self.fade_in(BLINK_FADE_IN_MS).await;
        }
    }
}

async fn fade_to(target: u8, ms: u16) {
    let start = BRIGHTNESS.load(Ordering::Relaxed) as i32;
    let delta = target as i32 - start;
    let step_ms = (ms / FADE_STEPS as u16) as u64;

    for i in 1..=FADE_STEPS as i32 {
        let level = start + delta * i / FADE_STEPS as i32;
        BRIGHTNESS.store(level as u8, Ordering::Relaxed);
        Timer::after_millis(step_ms).await;
    }
}
