//! Study topics and the random topic spinner

use super::record::{non_blank, Record, RecordId, RecordList};
use crate::core::selection;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of random picks shown while the wheel spins
pub const SPIN_FRAMES: usize = 20;

/// A study topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    id: RecordId,

    /// Topic name
    pub name: String,
}

impl Topic {
    /// Topic identifier
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }
}

impl Record for Topic {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Topics to choose from plus the last spin result
#[derive(Debug, Clone, Default)]
pub struct TopicSpinner {
    topics: RecordList<Topic>,
    selected: Option<RecordId>,
}

impl TopicSpinner {
    /// Create a spinner with no topics
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a topic. Returns `None` for a blank name.
    pub fn add(&mut self, name: &str) -> Option<RecordId> {
        let name = non_blank(name)?;
        Some(self.topics.push_with(|id| Topic {
            id,
            name: name.to_string(),
        }))
    }

    /// Remove a topic; clears the spin result if it was that topic
    pub fn remove(&mut self, id: RecordId) -> bool {
        let removed = self.topics.remove(id).is_some();
        if removed && self.selected == Some(id) {
            self.selected = None;
        }
        removed
    }

    /// Topics in the order they were added
    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        self.topics.as_slice()
    }

    /// Topic chosen by the last spin
    #[must_use]
    pub fn selected(&self) -> Option<&Topic> {
        self.selected.and_then(|id| self.topics.get(id))
    }

    /// Spin the wheel
    ///
    /// Returns the [`SPIN_FRAMES`] uniformly random picks the animation shows;
    /// the last frame becomes the selected topic. Empty spinners return an
    /// empty sequence and keep no selection.
    pub fn spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<RecordId> {
        self.selected = None;
        let frames: Vec<RecordId> = (0..SPIN_FRAMES)
            .map_while(|_| selection::random_pick(self.topics.as_slice(), rng).map(Topic::id))
            .collect();
        self.selected = frames.last().copied();
        frames
    }
}
