//! The recurring one-second registration behind every timer widget

use std::time::Duration;

/// Time between two ticks
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A single cancellable one-second interval
///
/// A widget owns exactly one of these, so at most one registration can ever
/// feed its counters. Elapsed time (wall clock or simulated) goes in through
/// [`advance`](Self::advance) and whole ticks come out. Fractional time
/// carries over between calls while armed and is dropped on cancel.
#[derive(Debug, Clone, Default)]
pub struct IntervalTimer {
    armed: bool,
    pending: Duration,
    generation: u64,
}

impl IntervalTimer {
    /// Create a cancelled interval
    #[must_use]
    pub const fn new() -> Self {
        Self {
            armed: false,
            pending: Duration::ZERO,
            generation: 0,
        }
    }

    /// Register a fresh interval, cancelling any existing one first
    ///
    /// Returns the registration's generation number.
    pub fn arm(&mut self) -> u64 {
        self.cancel();
        self.armed = true;
        self.generation += 1;
        self.generation
    }

    /// Cancel the registration. Returns whether one was active.
    ///
    /// No tick is produced after this until the next [`arm`](Self::arm).
    pub fn cancel(&mut self) -> bool {
        let was_armed = self.armed;
        self.armed = false;
        self.pending = Duration::ZERO;
        was_armed
    }

    /// Whether a registration is active
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    /// Feed elapsed time and return how many ticks became due
    pub fn advance(&mut self, elapsed: Duration) -> u64 {
        if !self.armed {
            return 0;
        }
        self.pending = self.pending.saturating_add(elapsed);
        // One tick per whole second; the sub-second remainder carries over
        let ticks = self.pending.as_secs();
        self.pending = Duration::from_nanos(u64::from(self.pending.subsec_nanos()));
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_interval_never_ticks() {
        let mut interval = IntervalTimer::new();
        assert_eq!(interval.advance(Duration::from_secs(10)), 0);

        interval.arm();
        assert_eq!(interval.advance(Duration::from_secs(3)), 3);
        assert!(interval.cancel());
        assert_eq!(interval.advance(Duration::from_secs(5)), 0);
        assert!(!interval.cancel());
    }

    #[test]
    fn test_fractions_carry_over_while_armed() {
        let mut interval = IntervalTimer::new();
        interval.arm();
        assert_eq!(interval.advance(Duration::from_millis(600)), 0);
        assert_eq!(interval.advance(Duration::from_millis(600)), 1);
        assert_eq!(interval.advance(Duration::from_millis(800)), 1);
        assert_eq!(interval.advance(Duration::from_millis(2500)), 2);
    }

    #[test]
    fn test_rearm_discards_pending_time() {
        let mut interval = IntervalTimer::new();
        assert_eq!(interval.arm(), 1);
        assert_eq!(interval.advance(Duration::from_millis(900)), 0);
        assert_eq!(interval.arm(), 2);
        assert_eq!(interval.advance(Duration::from_millis(900)), 0);
        assert_eq!(interval.advance(Duration::from_millis(100)), 1);
        assert_eq!(interval.arm(), 3);
    }

    #[test]
    fn test_large_elapsed_counts_every_second() {
        let mut interval = IntervalTimer::new();
        interval.arm();
        let long = Duration::from_secs(u64::from(u32::MAX) + 5) + Duration::from_millis(700);
        assert_eq!(interval.advance(long), u64::from(u32::MAX) + 5);
        assert_eq!(interval.advance(Duration::from_millis(300)), 1);
    }
}
