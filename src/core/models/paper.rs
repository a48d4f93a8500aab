//! Past-paper tracker: subjects, each with a checklist of papers

use super::record::{non_blank, Record, RecordId, RecordList};
use crate::debug;
use serde::{Deserialize, Serialize};

/// A past paper (e.g., "May/June 2023 P2")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    id: RecordId,

    /// Paper code
    pub code: String,

    /// Whether the paper has been done
    pub completed: bool,
}

impl Paper {
    /// Paper identifier
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }
}

impl Record for Paper {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// A subject with its papers
#[derive(Debug, Clone)]
pub struct PaperSubject {
    id: RecordId,

    /// Subject name
    pub name: String,

    papers: RecordList<Paper>,
}

impl PaperSubject {
    /// Subject identifier
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// Papers in the order they were added
    #[must_use]
    pub fn papers(&self) -> &[Paper] {
        self.papers.as_slice()
    }

    /// Number of papers
    #[must_use]
    pub fn paper_count(&self) -> usize {
        self.papers.len()
    }

    /// Number of papers marked completed
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.papers.iter().filter(|p| p.completed).count()
    }
}

impl Record for PaperSubject {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Subjects plus the subject currently selected for adding papers
#[derive(Debug, Clone, Default)]
pub struct PaperTracker {
    subjects: RecordList<PaperSubject>,
    selected: Option<RecordId>,
}

impl PaperTracker {
    /// Create an empty tracker
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subject and select it. Returns `None` for a blank name.
    pub fn add_subject(&mut self, name: &str) -> Option<RecordId> {
        let name = non_blank(name)?;
        let id = self.subjects.push_with(|id| PaperSubject {
            id,
            name: name.to_string(),
            papers: RecordList::new(),
        });
        self.selected = Some(id);
        debug!("paper subject {id} added and selected");
        Some(id)
    }

    /// Remove a subject with all its papers; clears the selection if it pointed there
    pub fn remove_subject(&mut self, id: RecordId) -> bool {
        let removed = self.subjects.remove(id).is_some();
        if removed && self.selected == Some(id) {
            self.selected = None;
        }
        removed
    }

    /// Rename a subject in place
    pub fn rename_subject(&mut self, id: RecordId, name: &str) -> bool {
        let Some(name) = non_blank(name) else {
            return false;
        };
        self.subjects
            .update(id, |subject| subject.name = name.to_string())
    }

    /// Select a subject. Returns `false` for an unknown id.
    pub fn select(&mut self, id: RecordId) -> bool {
        if self.subjects.get(id).is_some() {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    /// Currently selected subject
    #[must_use]
    pub fn selected(&self) -> Option<&PaperSubject> {
        self.selected.and_then(|id| self.subjects.get(id))
    }

    /// Add a paper to the selected subject
    ///
    /// Returns `None` when no subject is selected or the code is blank.
    pub fn add_paper(&mut self, code: &str) -> Option<RecordId> {
        let code = non_blank(code)?;
        let subject = self.subjects.get_mut(self.selected?)?;
        Some(subject.papers.push_with(|id| Paper {
            id,
            code: code.to_string(),
            completed: false,
        }))
    }

    /// Remove a paper from a subject
    pub fn remove_paper(&mut self, subject: RecordId, paper: RecordId) -> bool {
        self.subjects
            .get_mut(subject)
            .is_some_and(|s| s.papers.remove(paper).is_some())
    }

    /// Flip a paper's completed flag, returning the new value
    pub fn toggle_paper(&mut self, subject: RecordId, paper: RecordId) -> Option<bool> {
        let paper = self.subjects.get_mut(subject)?.papers.get_mut(paper)?;
        paper.completed = !paper.completed;
        Some(paper.completed)
    }

    /// Subjects in the order they were added
    #[must_use]
    pub fn subjects(&self) -> &[PaperSubject] {
        self.subjects.as_slice()
    }

    /// Subject with `id`
    #[must_use]
    pub fn subject(&self, id: RecordId) -> Option<&PaperSubject> {
        self.subjects.get(id)
    }
}
