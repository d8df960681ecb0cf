use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the upcoming-birthdays report: the computed occurrence (this
/// year or the next) and the contact's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthday {
    pub date: NaiveDate,
    pub name: String,
}
