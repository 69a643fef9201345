//! Integration tests for pomodoro-matrix host-testable logic.

use pomodoro_matrix::config::{CELL_COUNT, LONGBREAK, SHORTBREAK, WORKTIME};
use pomodoro_matrix::matrix::{CoordinateTable, Frame};
use pomodoro_matrix::pomodoro::{Phase, RunState};
use pomodoro_matrix::ui::input_logic::PressTracker;
use pomodoro_matrix::{Effect, Event, Pomodoro};

/// Apply effects to a frame the way the display executor does.
fn apply(frame: &mut Frame, effects: &[Effect]) {
    for effect in effects {
        match effect {
            Effect::ShowFrame(f) => *frame = *f,
            Effect::ShowGlyph(g) => *frame = g.frame(),
            Effect::ToggleCell(c) => frame.toggle(c.x, c.y).unwrap(),
            _ => {}
        }
    }
}

fn run_seconds(timer: &mut Pomodoro, secs: u32) -> usize {
    let mut phase_changes = 0;
    for _ in 0..secs {
        let before = timer.phase();
        timer.handle(Event::Tick);
        if timer.phase() != before {
            phase_changes += 1;
        }
    }
    phase_changes
}

#[test]
fn full_pomodoro_set_ends_in_long_break() {
    let mut timer = Pomodoro::new();
    timer.boot();
    timer.handle(Event::ButtonBPress);

    // Work, short break ×3, fourth work interval.
    for _ in 0..3 {
        assert_eq!(run_seconds(&mut timer, WORKTIME as u32 * 60), 1);
        assert_eq!(timer.phase(), Phase::Resting);
        assert_eq!(timer.minutes(), SHORTBREAK);
        assert_eq!(run_seconds(&mut timer, SHORTBREAK as u32 * 60), 1);
        assert_eq!(timer.phase(), Phase::Working);
    }
    assert_eq!(timer.cycle(), 4);

    assert_eq!(run_seconds(&mut timer, WORKTIME as u32 * 60), 1);
    assert_eq!(timer.phase(), Phase::Resting);
    assert_eq!(timer.minutes(), LONGBREAK);
    assert_eq!(timer.cycle(), 0);
    assert_eq!(timer.run_state(), RunState::Running);
}

#[test]
fn display_tracks_countdown_and_blink() {
    let mut timer = Pomodoro::new();
    let mut frame = Frame::empty();
    apply(&mut frame, &timer.boot());
    assert_eq!(frame.lit_count(), WORKTIME as usize);

    apply(&mut frame, &timer.handle(Event::ButtonBPress));
    apply(&mut frame, &timer.handle(Event::Tick));
    // Last lit cell blinked off.
    assert_eq!(frame.lit_count(), WORKTIME as usize - 1);
    apply(&mut frame, &timer.handle(Event::Tick));
    assert_eq!(frame.lit_count(), WORKTIME as usize);

    for _ in 2..60 {
        apply(&mut frame, &timer.handle(Event::Tick));
    }
    assert_eq!(timer.remaining_minutes(), WORKTIME - 1);
    assert_eq!(frame, CoordinateTable::new().countdown_frame(WORKTIME - 1));
}

#[test]
fn gestures_drive_the_timer() {
    let mut tracker = PressTracker::new();
    let mut timer = Pomodoro::new();

    let mut gesture = |a: bool, b: bool, start: u64, held: u64| {
        assert_eq!(tracker.update(start, a, b), None);
        tracker.update(start + held, false, false).expect("gesture")
    };

    // Long A: step 5 → 1, then A: 25 wraps to 1.
    timer.handle(gesture(true, false, 0, 1200));
    timer.handle(gesture(true, false, 2000, 100));
    assert_eq!(timer.minutes(), 1);

    // B starts, long B stops.
    timer.handle(gesture(false, true, 3000, 100));
    assert_eq!(timer.run_state(), RunState::Running);
    timer.handle(gesture(false, true, 4000, 1500));
    assert_eq!(timer.run_state(), RunState::Stopped);

    // A+B long toggles sound.
    timer.handle(gesture(true, true, 6000, 1500));
    assert!(timer.sound_enabled());
}

proptest::proptest! {
    /// Countdown frame lights exactly `remaining` cells (clamped).
    #[test]
    fn countdown_lights_exact_count(remaining in 0u8..=u8::MAX) {
        let table = CoordinateTable::new();
        let lit = table.countdown_frame(remaining).lit_count();
        assert_eq!(lit, (remaining as usize).min(CELL_COUNT));
    }

    /// Cells lit for k minutes are a subset of those lit for k + 1.
    #[test]
    fn countdown_coverage_is_monotonic(k in 0u8..CELL_COUNT as u8) {
        let table = CoordinateTable::new();
        let small = table.countdown_frame(k);
        let large = table.countdown_frame(k + 1);
        for (a, b) in small.rows().iter().zip(large.rows().iter()) {
            assert_eq!(a & !b, 0, "k={} is not a subset of k+1", k);
        }
    }

    /// Invariants hold for any sequence of events.
    #[test]
    fn state_invariants_hold(events in proptest::collection::vec(0u8..7, 0..400)) {
        let mut timer = Pomodoro::new();
        timer.boot();
        for e in events {
            let event = match e {
                0 => Event::ButtonAPress,
                1 => Event::ButtonALongPress,
                2 => Event::ButtonBPress,
                3 => Event::ButtonBLongPress,
                4 => Event::ButtonABPress,
                5 => Event::ButtonABLongPress,
                _ => Event::Tick,
            };
            timer.handle(event);
            assert!(timer.remaining_minutes() <= timer.minutes());
            assert!(timer.elapsed_secs() < 60);
            assert!(timer.cycle() <= 4);
            if timer.run_state() == RunState::Stopped {
                assert_eq!(timer.elapsed_secs(), 0);
            }
        }
    }

    /// Stop always lands in a full, stopped countdown.
    #[test]
    fn stop_always_resets(ticks in 0u32..3000, paused in proptest::bool::ANY) {
        let mut timer = Pomodoro::new();
        timer.boot();
        timer.handle(Event::ButtonBPress);
        run_seconds(&mut timer, ticks);
        if paused {
            timer.handle(Event::ButtonBPress);
        }
        timer.handle(Event::ButtonBLongPress);
        assert_eq!(timer.run_state(), RunState::Stopped);
        assert_eq!(timer.remaining_minutes(), timer.minutes());
        assert_eq!(timer.elapsed_secs(), 0);
    }
}
