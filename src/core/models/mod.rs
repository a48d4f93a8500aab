//! List-based study widgets and their records

pub mod flashcard;
pub mod grade;
pub mod note;
pub mod paper;
pub mod quote;
pub mod record;
pub mod topic;

pub use flashcard::{CardFace, Deck, Flashcard};
pub use grade::{compute_gpa, format_gpa, grade_points, GradeBook, GradeEntry};
pub use note::{Note, NoteBoard, NoteColor, NoteDraft};
pub use paper::{Paper, PaperSubject, PaperTracker};
pub use quote::{quote_for_today, quote_of_the_day, random_quote, Quote, QUOTES};
pub use record::{IdGenerator, Record, RecordId, RecordList};
pub use topic::{Topic, TopicSpinner};
