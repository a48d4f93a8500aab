//! Flashcard deck with a study cursor

use super::record::{non_blank, Record, RecordId, RecordList};
use crate::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of question characters shown in the deck listing
const PREVIEW_CHARS: usize = 30;

/// A question/answer card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    id: RecordId,

    /// Front of the card
    pub question: String,

    /// Back of the card
    pub answer: String,
}

impl Flashcard {
    /// Card identifier
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// Question shortened for list display (`"What is..."`)
    #[must_use]
    pub fn preview(&self) -> String {
        let mut preview: String = self.question.chars().take(PREVIEW_CHARS).collect();
        if self.question.chars().count() > PREVIEW_CHARS {
            preview.push_str("...");
        }
        preview
    }
}

impl Record for Flashcard {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Which side of the current card is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    /// The question side
    Question,
    /// The answer side
    Answer,
}

/// A deck of flashcards plus the study position within it
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: RecordList<Flashcard>,
    cursor: usize,
    flipped: bool,
}

impl Deck {
    /// Create an empty deck
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card. Returns `None` when the question or answer is blank.
    pub fn add(&mut self, question: &str, answer: &str) -> Option<RecordId> {
        let question = non_blank(question)?;
        let answer = non_blank(answer)?;
        let id = self.cards.push_with(|id| Flashcard {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
        });
        debug!("flashcard {id} added ({} cards)", self.cards.len());
        Some(id)
    }

    /// Replace a card's question and answer in place
    ///
    /// Returns `false` when the card doesn't exist or either field is blank.
    pub fn update(&mut self, id: RecordId, question: &str, answer: &str) -> bool {
        let (Some(question), Some(answer)) = (non_blank(question), non_blank(answer)) else {
            return false;
        };
        self.cards.update(id, |card| {
            card.question = question.to_string();
            card.answer = answer.to_string();
        })
    }

    /// Remove a card, keeping the study cursor in range
    ///
    /// If the removed card sat before the cursor, the cursor steps back so the
    /// same card stays displayed. The cursor is then clamped to
    /// `max(0, len - 1)`.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let Some((index, _)) = self.cards.remove(id) else {
            return false;
        };
        if index < self.cursor {
            self.cursor -= 1;
        } else if index == self.cursor {
            self.flipped = false;
        }
        self.cursor = self.cursor.min(self.cards.len().saturating_sub(1));
        debug!("flashcard {id} removed, cursor now {}", self.cursor);
        true
    }

    /// Cards in deck order
    #[must_use]
    pub fn cards(&self) -> &[Flashcard] {
        self.cards.as_slice()
    }

    /// Number of cards
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Index of the card being studied
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Card being studied
    #[must_use]
    pub fn current(&self) -> Option<&Flashcard> {
        self.cards.at(self.cursor)
    }

    /// Side of the current card that is showing
    #[must_use]
    pub const fn face(&self) -> CardFace {
        if self.flipped {
            CardFace::Answer
        } else {
            CardFace::Question
        }
    }

    /// Text on the visible side of the current card
    #[must_use]
    pub fn visible_text(&self) -> Option<&str> {
        self.current().map(|card| match self.face() {
            CardFace::Question => card.question.as_str(),
            CardFace::Answer => card.answer.as_str(),
        })
    }

    /// Turn the current card over
    pub fn flip(&mut self) {
        if !self.is_empty() {
            self.flipped = !self.flipped;
        }
    }

    /// Move to the next card. Returns `false` at the end of the deck.
    pub fn next(&mut self) -> bool {
        if self.cursor + 1 < self.cards.len() {
            self.cursor += 1;
            self.flipped = false;
            true
        } else {
            false
        }
    }

    /// Move to the previous card. Returns `false` at the start of the deck.
    pub fn prev(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.flipped = false;
            true
        } else {
            false
        }
    }

    /// Shuffle the deck and restart from the first card's question
    ///
    /// Decks with fewer than two cards are left alone and `false` is returned.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.cards.len() < 2 {
            return false;
        }
        self.cards.shuffle(rng);
        self.cursor = 0;
        self.flipped = false;
        true
    }
}
