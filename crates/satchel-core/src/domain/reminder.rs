use crate::domain::birthday::{parse_date_field, DATE_FORMAT};
use crate::error::CoreError;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A note's reminder date. Valid only strictly after `today` at the moment
/// of construction; callers inject `today` so the rule stays testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reminder(NaiveDate);

impl Reminder {
    pub fn parse(raw: &str, today: NaiveDate) -> Result<Self, CoreError> {
        let date = parse_date_field(raw, "reminder")?;
        if date <= today {
            return Err(CoreError::invalid("reminder", "date must be later than today"));
        }
        Ok(Self(date))
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// Due when the date falls inside `[today, today + days]`, both ends
    /// inclusive.
    pub fn is_due(self, today: NaiveDate, days: i64) -> bool {
        self.0 >= today && self.0 <= today + Duration::days(days)
    }
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
