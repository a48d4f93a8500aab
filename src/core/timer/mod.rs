//! Timer widgets driven by a one-second interval

pub mod focus;
pub mod interval;
pub mod pomodoro;

pub use focus::{FocusBar, FocusTracker, TrackedSubject};
pub use interval::{IntervalTimer, TICK_PERIOD};
pub use pomodoro::{Pomodoro, PomodoroDurations, TimerMode, TimerSession, Transition};

/// Format seconds as zero-padded `MM:SS`
///
/// Minutes are not wrapped, so 6000 seconds is `100:00`.
#[must_use]
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Format seconds as zero-padded `HH:MM:SS`
#[must_use]
pub fn format_hms(secs: u64) -> String {
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
