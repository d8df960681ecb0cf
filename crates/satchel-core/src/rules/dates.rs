use crate::error::CoreError;
use chrono::{Datelike, NaiveDate};

pub const MAX_WINDOW_DAYS: i64 = 365;

/// The next calendar occurrence of `date`'s month/day on or after `today`.
/// Feb 29 is observed on Feb 28 in non-leap years.
pub fn next_occurrence(date: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in_year(date, today.year());
    if this_year < today {
        occurrence_in_year(date, today.year() + 1)
    } else {
        this_year
    }
}

pub fn days_until(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn validate_window_days(days: i64) -> Result<i64, CoreError> {
    if !(1..=MAX_WINDOW_DAYS).contains(&days) {
        return Err(CoreError::invalid(
            "days",
            format!("must be between 1 and {}", MAX_WINDOW_DAYS),
        ));
    }
    Ok(days)
}

fn occurrence_in_year(date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .expect("Feb 28 exists in every year")
}
