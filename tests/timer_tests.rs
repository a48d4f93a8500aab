//! Integration tests for the timer widgets driven by simulated time

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use study_hub::core::timer::{FocusTracker, Pomodoro, PomodoroDurations, TimerMode};

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

#[test]
fn pomodoro_full_cycle() {
    let mut timer = Pomodoro::default();
    timer.start();

    let transitions = timer.advance(secs(1500));
    assert_eq!(transitions.len(), 1);
    assert_eq!(timer.mode(), TimerMode::Break);
    assert_eq!(timer.remaining_secs(), 300);
    assert_eq!(timer.completed_cycles(), 1);

    let transitions = timer.advance(secs(300));
    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0].to, TimerMode::Focus);
    assert_eq!(timer.mode(), TimerMode::Focus);
    assert_eq!(timer.remaining_secs(), 1500);
    // Only focus-to-break transitions count
    assert_eq!(timer.completed_cycles(), 1);
}

#[test]
fn pomodoro_remaining_never_reaches_zero() {
    let mut timer = Pomodoro::new(PomodoroDurations {
        focus_secs: 4,
        break_secs: 2,
    });
    timer.start();
    for _ in 0..50 {
        timer.advance(secs(1));
        assert!(timer.remaining_secs() >= 1);
        assert!(timer.remaining_secs() <= timer.durations().for_mode(timer.mode()));
    }
}

#[test]
fn pomodoro_pause_stops_advance() {
    let mut timer = Pomodoro::default();
    timer.start();
    timer.advance(secs(10));
    timer.pause();

    assert!(timer.advance(secs(600)).is_empty());
    assert_eq!(timer.remaining_secs(), 1490);

    timer.start();
    timer.advance(secs(5));
    assert_eq!(timer.remaining_secs(), 1485);
}

#[test]
fn pomodoro_pause_discards_partial_second() {
    let mut timer = Pomodoro::default();
    timer.start();
    timer.advance(Duration::from_millis(900));
    timer.pause();
    timer.start();
    timer.advance(Duration::from_millis(900));
    assert_eq!(timer.remaining_secs(), 1500);
    timer.advance(Duration::from_millis(100));
    assert_eq!(timer.remaining_secs(), 1499);
}

#[test]
fn pomodoro_reset_from_any_state() {
    let mut timer = Pomodoro::default();
    timer.start();
    timer.advance(secs(1600));
    assert_eq!(timer.mode(), TimerMode::Break);

    timer.reset();
    assert_eq!(timer.mode(), TimerMode::Focus);
    assert_eq!(timer.remaining_secs(), 1500);
    assert_eq!(timer.completed_cycles(), 0);
    assert!(!timer.is_running());
    assert!(timer.advance(secs(100)).is_empty());
}

#[test]
fn focus_tracker_single_active_subject() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut tracker = FocusTracker::new();
    let maths = tracker.add_subject("Maths", &mut rng).unwrap();
    let physics = tracker.add_subject("Physics", &mut rng).unwrap();

    tracker.start_tracking(maths);
    tracker.advance(secs(60));
    // Re-starting the same subject starts a fresh session, no double counting
    tracker.start_tracking(maths);
    tracker.advance(secs(30));
    tracker.start_tracking(physics);
    tracker.advance(secs(15));

    let total: u64 = tracker.subjects().iter().map(|s| s.cumulative_secs()).sum();
    assert_eq!(total, 105);
    assert_eq!(tracker.subject(maths).unwrap().cumulative_secs(), 90);
    assert_eq!(tracker.session_secs(), 15);
}

#[test]
fn focus_tracker_stop_freezes_counters() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut tracker = FocusTracker::new();
    let art = tracker.add_subject("Art", &mut rng).unwrap();

    tracker.start_tracking(art);
    tracker.advance(secs(42));
    tracker.stop_tracking();
    assert_eq!(tracker.advance(secs(100)), 0);
    assert_eq!(tracker.subject(art).unwrap().cumulative_secs(), 42);
    assert!(!tracker.stop_tracking());
}
