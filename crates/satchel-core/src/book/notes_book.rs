use crate::book::normalize_key;
use crate::domain::{Note, Tag};
use crate::error::CoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Keyed collection of notes, same shape as the address book but keyed by
/// the lower-cased title.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesBook {
    notes: BTreeMap<String, Note>,
}

impl NotesBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.values()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.notes.contains_key(&normalize_key(title))
    }

    pub fn add_note(&mut self, note: Note) -> Result<(), CoreError> {
        let key = note.title().key();
        if self.notes.contains_key(&key) {
            return Err(CoreError::duplicate("note", note.title().as_str()));
        }
        self.notes.insert(key, note);
        Ok(())
    }

    pub fn find(&self, title: &str) -> Result<&Note, CoreError> {
        self.notes
            .get(&normalize_key(title))
            .ok_or_else(|| CoreError::not_found("note", title.trim()))
    }

    pub fn find_mut(&mut self, title: &str) -> Result<&mut Note, CoreError> {
        self.notes
            .get_mut(&normalize_key(title))
            .ok_or_else(|| CoreError::not_found("note", title.trim()))
    }

    pub fn delete(&mut self, title: &str) -> Result<Note, CoreError> {
        self.notes
            .remove(&normalize_key(title))
            .ok_or_else(|| CoreError::not_found("note", title.trim()))
    }

    /// Notes holding a tag equal to the normalized `raw`, in collection
    /// order.
    pub fn search_by_tag(&self, raw: &str) -> Result<Vec<&Note>, CoreError> {
        let tag = Tag::new(raw)?;
        Ok(self
            .notes
            .values()
            .filter(|note| note.has_tag(&tag))
            .collect())
    }

    /// Same filter as [`search_by_tag`](Self::search_by_tag), sorted by
    /// normalized title ascending.
    pub fn sort_by_tag(&self, raw: &str) -> Result<Vec<&Note>, CoreError> {
        let mut notes = self.search_by_tag(raw)?;
        notes.sort_by_key(|note| note.title().key());
        Ok(notes)
    }

    /// All distinct tags across all notes.
    pub fn all_tags(&self) -> BTreeSet<Tag> {
        self.notes
            .values()
            .flat_map(|note| note.tags().iter().cloned())
            .collect()
    }

    /// Notes whose reminder falls inside `[today, today + days]`.
    pub fn upcoming_reminders(&self, today: NaiveDate, days: i64) -> Vec<&Note> {
        self.notes
            .values()
            .filter(|note| note.is_reminder_due(today, days))
            .collect()
    }
}
