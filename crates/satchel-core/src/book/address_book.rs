use crate::book::normalize_key;
use crate::domain::Record;
use crate::dto::UpcomingBirthday;
use crate::error::CoreError;
use crate::rules::dates::{days_until, next_occurrence};
use crate::rules::matching::{name_similarity, SIMILARITY_THRESHOLD};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Keyed collection of contact records. Keys are the lower-cased names, so
/// lookup is case-insensitive and iteration order is deterministic. The book
/// owns its records outright.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(&normalize_key(name))
    }

    pub fn add_record(&mut self, record: Record) -> Result<(), CoreError> {
        let key = record.name().key();
        if self.records.contains_key(&key) {
            return Err(CoreError::duplicate("contact", record.name().as_str()));
        }
        self.records.insert(key, record);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Result<&Record, CoreError> {
        self.records
            .get(&normalize_key(name))
            .ok_or_else(|| CoreError::not_found("contact", name.trim()))
    }

    pub fn find_mut(&mut self, name: &str) -> Result<&mut Record, CoreError> {
        self.records
            .get_mut(&normalize_key(name))
            .ok_or_else(|| CoreError::not_found("contact", name.trim()))
    }

    /// Removes and returns the record so the caller can still render it.
    pub fn delete(&mut self, name: &str) -> Result<Record, CoreError> {
        self.records
            .remove(&normalize_key(name))
            .ok_or_else(|| CoreError::not_found("contact", name.trim()))
    }

    /// Case-insensitive substring match over names and phone strings.
    pub fn search(&self, term: &str) -> Vec<&Record> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.records
            .values()
            .filter(|record| {
                record.name().key().contains(&needle) || record.phone_matches(term.trim())
            })
            .collect()
    }

    /// Fuzzy name search tolerant of typos: records whose name scores at
    /// least the similarity threshold, plus records whose phone contains the
    /// term literally. Ordered by score descending, then name key; capped at
    /// `limit`.
    pub fn smart_search(&self, term: &str, limit: usize) -> Vec<&Record> {
        let needle = term.trim();
        if needle.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(u32, &String, &Record)> = Vec::new();
        for (key, record) in &self.records {
            let score = name_similarity(needle, record.name().as_str());
            if score >= SIMILARITY_THRESHOLD || record.phone_matches(needle) {
                scored.push((score, key, record));
            }
        }
        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, _, record)| record)
            .collect()
    }

    /// Birthdays whose next occurrence is strictly fewer than `days` days
    /// away. A birthday exactly `days` away is excluded. Sorted by date,
    /// then name.
    pub fn upcoming_birthdays(&self, today: NaiveDate, days: i64) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();
        for record in self.records.values() {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let occurrence = next_occurrence(birthday.date(), today);
            if days_until(today, occurrence) < days {
                upcoming.push(UpcomingBirthday {
                    date: occurrence,
                    name: record.name().as_str().to_string(),
                });
            }
        }
        upcoming.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
        upcoming
    }
}

#[cfg(test)]
mod tests {
    use super::AddressBook;
    use crate::domain::Record;
    use crate::error::CoreErrorKind;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(name: &str) -> Record {
        Record::new(name).unwrap()
    }

    #[test]
    fn duplicate_names_are_rejected_case_insensitively() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice")).unwrap();
        let err = book.add_record(record("alice")).unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::Duplicate);
        assert_eq!(book.len(), 1);

        let found = book.find("ALICE").unwrap();
        assert_eq!(found.name().as_str(), "Alice");
    }

    #[test]
    fn find_normalizes_whitespace_and_case() {
        let mut book = AddressBook::new();
        book.add_record(record("Ada Lovelace")).unwrap();
        assert!(book.find("  ada lovelace ").is_ok());
    }

    #[test]
    fn delete_missing_contact_leaves_book_unchanged() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice")).unwrap();
        let err = book.delete("Bob").unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::NotFound);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn delete_returns_the_removed_record() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice")).unwrap();
        let removed = book.delete("alice").unwrap();
        assert_eq!(removed.name().as_str(), "Alice");
        assert!(book.is_empty());
    }

    #[test]
    fn search_matches_name_or_phone_substring() {
        let mut book = AddressBook::new();
        let mut alice = record("Alice Cooper");
        alice.add_phone("0501234567").unwrap();
        book.add_record(alice).unwrap();
        book.add_record(record("Bob")).unwrap();

        let by_name = book.search("coop");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name().as_str(), "Alice Cooper");

        let by_phone = book.search("12345");
        assert_eq!(by_phone.len(), 1);

        assert!(book.search("zzz").is_empty());
        assert!(book.search("  ").is_empty());
    }

    #[test]
    fn smart_search_tolerates_typos() {
        let mut book = AddressBook::new();
        book.add_record(record("John Smith")).unwrap();
        book.add_record(record("Jane Doe")).unwrap();

        let results = book.smart_search("Jon", 5);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name().as_str(), "John Smith");
    }

    #[test]
    fn smart_search_includes_literal_phone_hits() {
        let mut book = AddressBook::new();
        let mut bob = record("Bob");
        bob.add_phone("0739999999").unwrap();
        book.add_record(bob).unwrap();

        let results = book.smart_search("9999", 5);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name().as_str(), "Bob");
    }

    #[test]
    fn smart_search_respects_the_limit() {
        let mut book = AddressBook::new();
        for name in ["Ann", "Anna", "Anne", "Annie"] {
            book.add_record(record(name)).unwrap();
        }
        assert_eq!(book.smart_search("Anna", 2).len(), 2);
    }

    #[test]
    fn upcoming_birthdays_boundary_is_exclusive() {
        let today = day(2024, 6, 10);
        let mut book = AddressBook::new();

        let mut near = record("Near");
        near.set_birthday("15.06.1990").unwrap();
        book.add_record(near).unwrap();

        let mut boundary = record("Boundary");
        boundary.set_birthday("17.06.1990").unwrap();
        book.add_record(boundary).unwrap();

        let upcoming = book.upcoming_birthdays(today, 7);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Near");
        assert_eq!(upcoming[0].date, day(2024, 6, 15));
    }

    #[test]
    fn upcoming_birthdays_roll_into_next_year() {
        let today = day(2024, 12, 30);
        let mut book = AddressBook::new();
        let mut contact = record("Newyear");
        contact.set_birthday("02.01.1985").unwrap();
        book.add_record(contact).unwrap();

        let upcoming = book.upcoming_birthdays(today, 7);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].date, day(2025, 1, 2));
    }

    #[test]
    fn upcoming_birthdays_sorted_by_date_then_name() {
        let today = day(2024, 6, 10);
        let mut book = AddressBook::new();
        for (name, date) in [("Zed", "12.06.1990"), ("Amy", "12.06.1991"), ("Ben", "11.06.1992")] {
            let mut contact = record(name);
            contact.set_birthday(date).unwrap();
            book.add_record(contact).unwrap();
        }

        let upcoming = book.upcoming_birthdays(today, 7);
        let names: Vec<&str> = upcoming.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, ["Ben", "Amy", "Zed"]);
    }
}
