//! Coloured notes with an edit-in-progress cursor

use super::record::{non_blank, Record, RecordId, RecordList};
use crate::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Title given to notes saved without one
pub const UNTITLED: &str = "Untitled";

/// Background colours a note can take
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteColor {
    /// `#ffffff`
    #[default]
    White,
    /// `#dbeafe`
    Blue,
    /// `#dcfce7`
    Green,
    /// `#fee2e2`
    Red,
    /// `#fae8ff`
    Purple,
    /// `#fef3c7`
    Yellow,
}

impl NoteColor {
    /// Every selectable colour, in picker order
    pub const ALL: [Self; 6] = [
        Self::White,
        Self::Blue,
        Self::Green,
        Self::Red,
        Self::Purple,
        Self::Yellow,
    ];

    /// Hex code used for rendering
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::White => "#ffffff",
            Self::Blue => "#dbeafe",
            Self::Green => "#dcfce7",
            Self::Red => "#fee2e2",
            Self::Purple => "#fae8ff",
            Self::Yellow => "#fef3c7",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Red => "Red",
            Self::Purple => "Purple",
            Self::Yellow => "Yellow",
        }
    }
}

impl FromStr for NoteColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s) || c.hex().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown note color: '{s}'"))
    }
}

impl fmt::Display for NoteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A saved note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    id: RecordId,

    /// Note title, never empty
    pub title: String,

    /// Note body
    pub content: String,

    /// Background colour
    pub color: NoteColor,
}

impl Note {
    /// Note identifier
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }
}

impl Record for Note {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Form contents used to create or edit a note
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    /// Title field
    pub title: String,
    /// Content field
    pub content: String,
    /// Selected colour
    pub color: NoteColor,
}

impl NoteDraft {
    /// Build a draft from field values
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>, color: NoteColor) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            color,
        }
    }

    fn title_or_untitled(&self) -> String {
        non_blank(&self.title).unwrap_or(UNTITLED).to_string()
    }
}

/// Notes in creation order, plus the note currently being edited
#[derive(Debug, Clone, Default)]
pub struct NoteBoard {
    notes: RecordList<Note>,
    editing: Option<RecordId>,
}

impl NoteBoard {
    /// Create an empty board
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a new note
    ///
    /// Rejected (`None`) only when both title and content are blank; a blank
    /// title becomes [`UNTITLED`].
    pub fn add(&mut self, draft: &NoteDraft) -> Option<RecordId> {
        if non_blank(&draft.title).is_none() && non_blank(&draft.content).is_none() {
            return None;
        }
        let title = draft.title_or_untitled();
        let id = self.notes.push_with(|id| Note {
            id,
            title,
            content: draft.content.trim().to_string(),
            color: draft.color,
        });
        debug!("note {id} added");
        Some(id)
    }

    /// Replace a note's fields in place. Returns `false` for an unknown id.
    pub fn update(&mut self, id: RecordId, draft: &NoteDraft) -> bool {
        let title = draft.title_or_untitled();
        self.notes.update(id, |note| {
            note.title = title;
            note.content = draft.content.trim().to_string();
            note.color = draft.color;
        })
    }

    /// Delete a note; if it was being edited the edit is abandoned
    pub fn remove(&mut self, id: RecordId) -> bool {
        let removed = self.notes.remove(id).is_some();
        if removed && self.editing == Some(id) {
            self.editing = None;
        }
        removed
    }

    /// Begin editing a note, returning its fields as a draft
    pub fn start_editing(&mut self, id: RecordId) -> Option<NoteDraft> {
        let note = self.notes.get(id)?;
        self.editing = Some(id);
        Some(NoteDraft::new(&note.title, &note.content, note.color))
    }

    /// Apply `draft` to the note being edited and finish editing
    ///
    /// Returns `false` when nothing is being edited.
    pub fn save_edit(&mut self, draft: &NoteDraft) -> bool {
        let Some(id) = self.editing.take() else {
            return false;
        };
        self.update(id, draft)
    }

    /// Abandon the current edit
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Note currently being edited
    #[must_use]
    pub const fn editing(&self) -> Option<RecordId> {
        self.editing
    }

    /// Notes in creation order
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        self.notes.as_slice()
    }

    /// Note with `id`
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&Note> {
        self.notes.get(id)
    }
}
