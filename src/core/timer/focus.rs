//! Focus tracker: time spent per subject, one subject at a time

use super::interval::IntervalTimer;
use crate::core::models::record::{non_blank, Record, RecordId, RecordList};
use crate::core::selection;
use crate::debug;
use rand::Rng;
use std::time::Duration;

/// Colours assigned to new subjects
pub const SUBJECT_COLORS: [&str; 6] = [
    "#3b82f6", // blue
    "#10b981", // green
    "#ef4444", // red
    "#8b5cf6", // purple
    "#f59e0b", // amber
    "#ec4899", // pink
];

/// A subject whose focus time is being tracked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedSubject {
    id: RecordId,

    /// Display name
    pub name: String,

    /// Colour tag from [`SUBJECT_COLORS`]
    pub color: &'static str,

    cumulative_secs: u64,
}

impl TrackedSubject {
    /// Subject identifier
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// Total seconds tracked for this subject
    #[must_use]
    pub const fn cumulative_secs(&self) -> u64 {
        self.cumulative_secs
    }
}

impl Record for TrackedSubject {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// One bar of the focus distribution chart
#[derive(Debug, Clone, PartialEq)]
pub struct FocusBar {
    /// Subject identifier
    pub id: RecordId,
    /// Subject name
    pub name: String,
    /// Subject colour
    pub color: &'static str,
    /// Total tracked seconds
    pub seconds: u64,
    /// Bar width relative to the longest bar, in `0.0..=1.0`
    pub fraction: f64,
}

/// The focus tracker widget
#[derive(Debug, Clone, Default)]
pub struct FocusTracker {
    subjects: RecordList<TrackedSubject>,
    active: Option<RecordId>,
    session_secs: u64,
    interval: IntervalTimer,
}

impl FocusTracker {
    /// Create a tracker with no subjects
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subject with a random colour. Returns `None` for a blank name.
    pub fn add_subject<R: Rng + ?Sized>(&mut self, name: &str, rng: &mut R) -> Option<RecordId> {
        let name = non_blank(name)?;
        let color = selection::random_pick(&SUBJECT_COLORS, rng).map_or(SUBJECT_COLORS[0], |c| *c);
        Some(self.subjects.push_with(|id| TrackedSubject {
            id,
            name: name.to_string(),
            color,
            cumulative_secs: 0,
        }))
    }

    /// Remove a subject, stopping tracking first if it is the active one
    pub fn remove_subject(&mut self, id: RecordId) -> bool {
        if self.active == Some(id) {
            self.stop_tracking();
        }
        self.subjects.remove(id).is_some()
    }

    /// Rename a subject in place
    pub fn rename_subject(&mut self, id: RecordId, name: &str) -> bool {
        let Some(name) = non_blank(name) else {
            return false;
        };
        self.subjects
            .update(id, |subject| subject.name = name.to_string())
    }

    /// Make `id` the active subject and start a new session
    ///
    /// Any running session is stopped first. Returns `false` (and changes
    /// nothing) for an unknown subject.
    pub fn start_tracking(&mut self, id: RecordId) -> bool {
        if self.subjects.get(id).is_none() {
            return false;
        }
        if self.active.is_some() {
            self.stop_tracking();
        }
        self.active = Some(id);
        self.session_secs = 0;
        let registration = self.interval.arm();
        debug!("focus tracking {id} (registration {registration})");
        true
    }

    /// Stop the session and clear the active subject
    ///
    /// Session time is discarded; seconds already added to the subject stay.
    /// Returns `false` if nothing was being tracked.
    pub fn stop_tracking(&mut self) -> bool {
        self.interval.cancel();
        let Some(id) = self.active.take() else {
            return false;
        };
        debug!("focus tracking {id} stopped after {}s", self.session_secs);
        self.session_secs = 0;
        true
    }

    /// Add one second to the session and the active subject
    ///
    /// Returns `false` when nothing is being tracked.
    pub fn tick(&mut self) -> bool {
        if !self.interval.is_armed() {
            return false;
        }
        let Some(subject) = self.active.and_then(|id| self.subjects.get_mut(id)) else {
            return false;
        };
        subject.cumulative_secs += 1;
        self.session_secs += 1;
        true
    }

    /// Feed elapsed time and apply every tick that became due. Returns the ticks applied.
    pub fn advance(&mut self, elapsed: Duration) -> u64 {
        let ticks = self.interval.advance(elapsed);
        (0..ticks).map(|_| u64::from(self.tick())).sum()
    }

    /// Subject being tracked
    #[must_use]
    pub fn active(&self) -> Option<&TrackedSubject> {
        self.active.and_then(|id| self.subjects.get(id))
    }

    /// Seconds in the current session
    #[must_use]
    pub const fn session_secs(&self) -> u64 {
        self.session_secs
    }

    /// Subjects in the order they were added
    #[must_use]
    pub fn subjects(&self) -> &[TrackedSubject] {
        self.subjects.as_slice()
    }

    /// Subject with `id`
    #[must_use]
    pub fn subject(&self, id: RecordId) -> Option<&TrackedSubject> {
        self.subjects.get(id)
    }

    /// Bar chart of tracked time, scaled to the longest total (at least one second)
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn distribution(&self) -> Vec<FocusBar> {
        let max = self
            .subjects
            .iter()
            .map(TrackedSubject::cumulative_secs)
            .max()
            .unwrap_or(0)
            .max(1);
        self.subjects
            .iter()
            .map(|s| FocusBar {
                id: s.id,
                name: s.name.clone(),
                color: s.color,
                seconds: s.cumulative_secs,
                fraction: s.cumulative_secs as f64 / max as f64,
            })
            .collect()
    }
}
