use crate::domain::{NoteText, Reminder, Tag, Title};
use crate::error::CoreError;
use crate::time::format_timestamp_datetime;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

const PLACEHOLDER: &str = "-";

/// One note: an immutable title, optional text, unique tags in insertion
/// order, a creation timestamp stamped once, and an optional reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    title: Title,
    text: Option<NoteText>,
    tags: Vec<Tag>,
    created_at: i64,
    reminder: Option<Reminder>,
}

impl Note {
    pub fn new(title: &str, now: i64) -> Result<Self, CoreError> {
        Ok(Self {
            title: Title::new(title)?,
            text: None,
            tags: Vec::new(),
            created_at: now,
            reminder: None,
        })
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn text(&self) -> Option<&NoteText> {
        self.text.as_ref()
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn reminder(&self) -> Option<Reminder> {
        self.reminder
    }

    /// Last write wins; existing text is replaced without warning.
    pub fn set_text(&mut self, raw: &str) -> Result<(), CoreError> {
        self.text = Some(NoteText::new(raw)?);
        Ok(())
    }

    pub fn add_tag(&mut self, raw: &str) -> Result<(), CoreError> {
        let tag = Tag::new(raw)?;
        if self.tags.contains(&tag) {
            return Err(CoreError::duplicate("tag", tag.as_str()));
        }
        self.tags.push(tag);
        Ok(())
    }

    pub fn remove_tag(&mut self, raw: &str) -> Result<(), CoreError> {
        let tag = Tag::new(raw)?;
        let index = self
            .tags
            .iter()
            .position(|existing| *existing == tag)
            .ok_or_else(|| CoreError::not_found("tag", tag.as_str()))?;
        self.tags.remove(index);
        Ok(())
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Replaces any existing reminder; the date must be strictly later than
    /// `today`.
    pub fn set_reminder(&mut self, raw: &str, today: NaiveDate) -> Result<(), CoreError> {
        self.reminder = Some(Reminder::parse(raw, today)?);
        Ok(())
    }

    pub fn clear_reminder(&mut self) {
        self.reminder = None;
    }

    pub fn is_reminder_due(&self, today: NaiveDate, days: i64) -> bool {
        self.reminder
            .map(|reminder| reminder.is_due(today, days))
            .unwrap_or(false)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .text
            .as_ref()
            .map(|text| text.as_str().to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        let tags = if self.tags.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            self.tags
                .iter()
                .map(|tag| tag.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let reminder = self
            .reminder
            .map(|reminder| reminder.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        write!(
            f,
            "title: {} | text: {} | tags: {} | created: {} | reminder: {}",
            self.title,
            text,
            tags,
            format_timestamp_datetime(self.created_at),
            reminder
        )
    }
}
