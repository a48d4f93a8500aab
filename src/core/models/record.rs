//! Generic in-memory record list shared by every list-based widget

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique record identifier derived from the creation timestamp (epoch milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(u64);

impl RecordId {
    /// Wrap a raw identifier value
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw identifier value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out strictly increasing timestamp identifiers
///
/// Two records created within the same millisecond (or after the wall clock
/// stepped backwards) get `previous + 1`, so identifiers never collide.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: Option<u64>,
}

impl IdGenerator {
    /// Create a generator with no identifiers issued yet
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Next identifier based on the current time
    pub fn next_id(&mut self) -> RecordId {
        let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_at(now)
    }

    /// Next identifier for an explicit creation time in epoch milliseconds
    pub fn next_at(&mut self, millis: u64) -> RecordId {
        let value = match self.last {
            Some(last) if millis <= last => last + 1,
            _ => millis,
        };
        self.last = Some(value);
        RecordId(value)
    }
}

/// A user-created item with a unique identifier
pub trait Record {
    /// The record's identifier
    fn id(&self) -> RecordId;
}

/// Returns the trimmed text, or `None` when it is empty or whitespace-only
#[must_use]
pub fn non_blank(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Ordered collection of records with identifier-based access
///
/// Records keep their insertion order; removal never reorders survivors.
#[derive(Debug, Clone)]
pub struct RecordList<T> {
    items: Vec<T>,
    ids: IdGenerator,
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            ids: IdGenerator::new(),
        }
    }
}

impl<T: Record> RecordList<T> {
    /// Create an empty list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record built from a freshly generated identifier
    pub fn push_with(&mut self, build: impl FnOnce(RecordId) -> T) -> RecordId {
        let id = self.ids.next_id();
        self.items.push(build(id));
        id
    }

    /// Index of the record with `id`
    #[must_use]
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Remove the record with `id`, returning its former index and the record
    pub fn remove(&mut self, id: RecordId) -> Option<(usize, T)> {
        let index = self.position(id)?;
        Some((index, self.items.remove(index)))
    }

    /// Record with `id`
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Mutable access to the record with `id`
    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Apply `change` to the record with `id` in place. Returns `false` if no such record.
    pub fn update(&mut self, id: RecordId, change: impl FnOnce(&mut T)) -> bool {
        self.get_mut(id).map(change).is_some()
    }

    /// Record at `index`
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterate over records in order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Records as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Reorder the records into a uniformly random permutation
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.items.shuffle(rng);
    }
}

impl<'a, T: Record> IntoIterator for &'a RecordList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: RecordId,
        label: String,
    }

    impl Record for Item {
        fn id(&self) -> RecordId {
            self.id
        }
    }

    fn push(list: &mut RecordList<Item>, label: &str) -> RecordId {
        list.push_with(|id| Item {
            id,
            label: label.to_string(),
        })
    }

    fn labels(list: &RecordList<Item>) -> Vec<&str> {
        list.iter().map(|i| i.label.as_str()).collect()
    }

    #[test]
    fn test_id_generator_is_strictly_increasing() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_at(1000), RecordId::new(1000));
        assert_eq!(ids.next_at(1000), RecordId::new(1001));
        assert_eq!(ids.next_at(900), RecordId::new(1002));
        assert_eq!(ids.next_at(5000), RecordId::new(5000));
    }

    #[test]
    fn test_push_generates_unique_ids() {
        let mut list = RecordList::new();
        let ids: Vec<RecordId> = (0..50).map(|n| push(&mut list, &n.to_string())).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(list.len(), 50);
    }

    #[test]
    fn test_remove_preserves_order_of_survivors() {
        let mut list = RecordList::new();
        let a = push(&mut list, "a");
        let _b = push(&mut list, "b");
        let c = push(&mut list, "c");
        let _d = push(&mut list, "d");

        assert_eq!(list.remove(c).map(|(idx, _)| idx), Some(2));
        assert_eq!(list.remove(a).map(|(idx, _)| idx), Some(0));
        assert_eq!(labels(&list), vec!["b", "d"]);

        // Removing twice is a no-op
        assert!(list.remove(a).is_none());
    }

    #[test]
    fn test_update_keeps_position_and_id() {
        let mut list = RecordList::new();
        push(&mut list, "first");
        let second = push(&mut list, "second");
        push(&mut list, "third");

        assert!(list.update(second, |item| item.label = "changed".to_string()));
        assert_eq!(labels(&list), vec!["first", "changed", "third"]);
        assert_eq!(list.position(second), Some(1));
        assert!(!list.update(RecordId::new(1), |item| item.label.clear()));
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("  hello "), Some("hello"));
        assert_eq!(non_blank(" \t\n"), None);
        assert_eq!(non_blank(""), None);
    }
}
