//! Grade entries and the weighted GPA calculation

use super::record::{non_blank, Record, RecordId, RecordList};
use serde::{Deserialize, Serialize};

/// Credit weight range accepted for an entry
pub const CREDIT_RANGE: std::ops::RangeInclusive<u32> = 1..=6;

/// Credit weight used when none is given
pub const DEFAULT_CREDITS: u32 = 3;

/// Grade points for a letter grade on the common 4.0 scale
///
/// Unrecognized letters count as `0.0`.
#[must_use]
pub fn grade_points(letter: &str) -> f64 {
    match letter {
        "A+" | "A" => 4.0,
        "A-" => 3.7,
        "B+" => 3.3,
        "B" => 3.0,
        "B-" => 2.7,
        "C+" => 2.3,
        "C" => 2.0,
        "C-" => 1.7,
        "D+" => 1.3,
        "D" => 1.0,
        "D-" => 0.7,
        _ => 0.0,
    }
}

/// One graded subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeEntry {
    id: RecordId,

    /// Subject name (e.g., "Mathematics")
    pub name: String,

    /// Letter grade, upper-cased (e.g., "B+")
    pub grade: String,

    /// Credit weight
    pub credits: u32,
}

impl GradeEntry {
    /// Entry identifier
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// Points for this entry's letter
    #[must_use]
    pub fn points(&self) -> f64 {
        grade_points(&self.grade)
    }
}

impl Record for GradeEntry {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Subjects entered for a GPA calculation
#[derive(Debug, Clone, Default)]
pub struct GradeBook {
    entries: RecordList<GradeEntry>,
}

impl GradeBook {
    /// Create an empty grade book
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subject. Returns `None` when the name or grade is blank or the
    /// credits fall outside [`CREDIT_RANGE`].
    ///
    /// The grade is stored trimmed and upper-cased; it is not validated
    /// against the grade table.
    pub fn add(&mut self, name: &str, grade: &str, credits: u32) -> Option<RecordId> {
        if !CREDIT_RANGE.contains(&credits) {
            return None;
        }
        let name = non_blank(name)?;
        let grade = non_blank(grade)?.to_uppercase();
        Some(self.entries.push_with(|id| GradeEntry {
            id,
            name: name.to_string(),
            grade,
            credits,
        }))
    }

    /// Remove a subject
    pub fn remove(&mut self, id: RecordId) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Replace a subject's grade and credits in place
    ///
    /// Returns `false` for an unknown id, a blank grade or out-of-range credits.
    pub fn update(&mut self, id: RecordId, grade: &str, credits: u32) -> bool {
        if !CREDIT_RANGE.contains(&credits) {
            return false;
        }
        let Some(grade) = non_blank(grade) else {
            return false;
        };
        let grade = grade.to_uppercase();
        self.entries.update(id, |entry| {
            entry.grade = grade;
            entry.credits = credits;
        })
    }

    /// Entries in the order they were added
    #[must_use]
    pub fn entries(&self) -> &[GradeEntry] {
        self.entries.as_slice()
    }

    /// Sum of credit weights
    #[must_use]
    pub fn total_credits(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.credits)).sum()
    }

    /// Credit-weighted grade point average
    ///
    /// `None` when there are no entries or the credits sum to zero.
    #[must_use]
    pub fn gpa(&self) -> Option<f64> {
        compute_gpa(self.entries.as_slice())
    }
}

/// Credit-weighted grade point average over `entries`
///
/// `None` when `entries` is empty or the credits sum to zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_gpa(entries: &[GradeEntry]) -> Option<f64> {
    let (points, credits) = entries
        .iter()
        .fold((0.0, 0u64), |(points, credits), entry| {
            (
                points + entry.points() * f64::from(entry.credits),
                credits + u64::from(entry.credits),
            )
        });
    (credits > 0).then(|| points / credits as f64)
}

/// Format a GPA with two decimals (e.g., `3.75`)
#[must_use]
pub fn format_gpa(gpa: f64) -> String {
    format!("{gpa:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_table() {
        assert!((grade_points("A+") - 4.0).abs() < f64::EPSILON);
        assert!((grade_points("A-") - 3.7).abs() < f64::EPSILON);
        assert!((grade_points("C+") - 2.3).abs() < f64::EPSILON);
        assert!((grade_points("D-") - 0.7).abs() < f64::EPSILON);
        assert!(grade_points("F").abs() < f64::EPSILON);
        assert!(grade_points("E").abs() < f64::EPSILON);
    }

    #[test]
    fn test_weighted_gpa() {
        let mut book = GradeBook::new();
        book.add("Mathematics", "A", 3);
        book.add("Art", "B", 1);
        let gpa = book.gpa().unwrap();
        assert!((gpa - 3.75).abs() < 1e-9);
        assert_eq!(format_gpa(gpa), "3.75");
        assert_eq!(book.total_credits(), 4);
    }

    #[test]
    fn test_gpa_undefined_without_credits() {
        let book = GradeBook::new();
        assert!(book.gpa().is_none());
        assert_eq!(book.total_credits(), 0);
    }

    #[test]
    fn test_credits_outside_range_are_rejected() {
        let mut book = GradeBook::new();
        assert!(book.add("Seminar", "A", 0).is_none());
        assert!(book.add("Thesis", "A", 7).is_none());
        assert!(book.add("Overflow", "A", u32::MAX).is_none());

        let id = book.add("Maths", "B", 6).unwrap();
        book.add("Art", "A", 1);
        assert!(!book.update(id, "B", u32::MAX));
        assert!(!book.update(id, "B", 0));
        assert_eq!(book.entries()[0].credits, 6);
        assert_eq!(book.total_credits(), 7);
        let gpa = book.gpa().unwrap();
        assert!((gpa - (3.0 * 6.0 + 4.0) / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_credit_sum_does_not_overflow() {
        let entry = |credits| GradeEntry {
            id: RecordId::new(1),
            name: "Bulk".to_string(),
            grade: "A".to_string(),
            credits,
        };
        let entries = [entry(u32::MAX), entry(u32::MAX)];
        let gpa = compute_gpa(&entries).unwrap();
        assert!((gpa - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_letters_count_as_zero() {
        let mut book = GradeBook::new();
        book.add("Physics", "a", 2);
        book.add("Chemistry", "pass", 2);
        assert_eq!(book.entries()[0].grade, "A");
        assert_eq!(book.entries()[1].grade, "PASS");
        assert!((book.gpa().unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_add_rejects_blank_and_remove_updates_average() {
        let mut book = GradeBook::new();
        assert!(book.add(" ", "A", 3).is_none());
        assert!(book.add("History", "  ", 3).is_none());

        let low = book.add("History", "C", 3).unwrap();
        book.add("Biology", "A", 3);
        assert!((book.gpa().unwrap() - 3.0).abs() < 1e-9);

        assert!(book.remove(low));
        assert!((book.gpa().unwrap() - 4.0).abs() < 1e-9);
        assert!(!book.remove(low));
    }

    #[test]
    fn test_update_changes_grade_in_place() {
        let mut book = GradeBook::new();
        let id = book.add("History", "C", 3).unwrap();
        assert!(book.update(id, "b+", 4));
        assert_eq!(book.entries()[0].grade, "B+");
        assert_eq!(book.entries()[0].credits, 4);
        assert!(!book.update(id, "", 4));
    }
}
