//! Pomodoro countdown: focus and break periods that repeat until paused

use super::format_clock;
use super::interval::IntervalTimer;
use crate::debug;
use std::fmt;
use std::time::Duration;

/// Which period the countdown is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    /// Working period
    Focus,
    /// Rest period
    Break,
}

impl fmt::Display for TimerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Focus => write!(f, "Focus Time"),
            Self::Break => write!(f, "Break Time"),
        }
    }
}

/// Period lengths in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PomodoroDurations {
    /// Focus period length
    pub focus_secs: u64,
    /// Break period length
    pub break_secs: u64,
}

impl PomodoroDurations {
    /// Length of the period for `mode`
    #[must_use]
    pub const fn for_mode(&self, mode: TimerMode) -> u64 {
        match mode {
            TimerMode::Focus => self.focus_secs,
            TimerMode::Break => self.break_secs,
        }
    }
}

impl Default for PomodoroDurations {
    fn default() -> Self {
        Self {
            focus_secs: 25 * 60,
            break_secs: 5 * 60,
        }
    }
}

/// Snapshot of the countdown state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSession {
    /// Current period
    pub mode: TimerMode,
    /// Seconds left in the current period
    pub remaining_secs: u64,
    /// Whether the countdown is ticking
    pub is_running: bool,
    /// Focus periods finished since the last reset
    pub completed_cycles: u32,
}

/// A period change produced by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Period that just ended
    pub from: TimerMode,
    /// Period that just started
    pub to: TimerMode,
    /// Completed cycles after the change
    pub completed_cycles: u32,
}

/// The pomodoro widget
#[derive(Debug, Clone)]
pub struct Pomodoro {
    durations: PomodoroDurations,
    mode: TimerMode,
    remaining_secs: u64,
    completed_cycles: u32,
    interval: IntervalTimer,
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self::new(PomodoroDurations::default())
    }
}

impl Pomodoro {
    /// A paused timer at the start of a focus period
    ///
    /// Zero durations are raised to one second so every period has at least one tick.
    #[must_use]
    pub fn new(durations: PomodoroDurations) -> Self {
        let durations = PomodoroDurations {
            focus_secs: durations.focus_secs.max(1),
            break_secs: durations.break_secs.max(1),
        };
        Self {
            durations,
            mode: TimerMode::Focus,
            remaining_secs: durations.focus_secs,
            completed_cycles: 0,
            interval: IntervalTimer::new(),
        }
    }

    /// Start ticking. Returns `false` if already running.
    pub fn start(&mut self) -> bool {
        if self.interval.is_armed() {
            return false;
        }
        self.interval.arm();
        debug!("pomodoro started: {} {}", self.mode, self.formatted());
        true
    }

    /// Stop ticking. Returns `false` if already paused.
    pub fn pause(&mut self) -> bool {
        let was_running = self.interval.cancel();
        if was_running {
            debug!("pomodoro paused at {}", self.formatted());
        }
        was_running
    }

    /// Start when paused, pause when running. Returns whether it is now running.
    pub fn toggle(&mut self) -> bool {
        if self.is_running() {
            self.pause();
        } else {
            self.start();
        }
        self.is_running()
    }

    /// Back to a paused focus period with no completed cycles
    pub fn reset(&mut self) {
        self.interval.cancel();
        self.mode = TimerMode::Focus;
        self.remaining_secs = self.durations.focus_secs;
        self.completed_cycles = 0;
    }

    /// Advance the countdown by one second
    ///
    /// Does nothing while paused. When the period would reach zero the other
    /// period starts at full length instead; finishing a focus period counts a cycle.
    pub fn tick(&mut self) -> Option<Transition> {
        if !self.is_running() {
            return None;
        }
        if self.remaining_secs > 1 {
            self.remaining_secs -= 1;
            return None;
        }

        let from = self.mode;
        self.mode = match from {
            TimerMode::Focus => {
                self.completed_cycles += 1;
                TimerMode::Break
            }
            TimerMode::Break => TimerMode::Focus,
        };
        self.remaining_secs = self.durations.for_mode(self.mode);
        debug!(
            "pomodoro switched {from:?} -> {:?} (cycles={})",
            self.mode, self.completed_cycles
        );
        Some(Transition {
            from,
            to: self.mode,
            completed_cycles: self.completed_cycles,
        })
    }

    /// Feed elapsed time and apply every tick that became due
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Transition> {
        let ticks = self.interval.advance(elapsed);
        (0..ticks).filter_map(|_| self.tick()).collect()
    }

    /// Current state
    #[must_use]
    pub const fn session(&self) -> TimerSession {
        TimerSession {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            is_running: self.interval.is_armed(),
            completed_cycles: self.completed_cycles,
        }
    }

    /// Current period
    #[must_use]
    pub const fn mode(&self) -> TimerMode {
        self.mode
    }

    /// Seconds left in the current period
    #[must_use]
    pub const fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    /// Whether the countdown is ticking
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.interval.is_armed()
    }

    /// Focus periods finished since the last reset
    #[must_use]
    pub const fn completed_cycles(&self) -> u32 {
        self.completed_cycles
    }

    /// Configured period lengths
    #[must_use]
    pub const fn durations(&self) -> PomodoroDurations {
        self.durations
    }

    /// Fraction of the current period already elapsed, in `0.0..1.0`
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        let total = self.durations.for_mode(self.mode);
        (total - self.remaining_secs) as f64 / total as f64
    }

    /// Remaining time as `MM:SS`
    #[must_use]
    pub fn formatted(&self) -> String {
        format_clock(self.remaining_secs)
    }
}
