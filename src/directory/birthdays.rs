//! Upcoming birthday computation.
//!
//! For every record with a birthday, the next occurrence on or after `today`
//! is found (rolling over to next year when this year's date has passed). The
//! record is reported when that occurrence is within the look-ahead window.
//! Occurrences on a weekend are congratulated the following Monday; the
//! shift only affects the reported date, never the window test.

use crate::domain::{format_date, Birthday};
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

/// Days after today that still count as "upcoming".
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// One entry of the upcoming birthdays report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// The contact's name
    pub name: String,

    /// The day to congratulate, already moved off weekends
    #[serde(serialize_with = "serialize_date")]
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `DD.MM.YYYY`.
    pub fn date_display(&self) -> String {
        format_date(self.congratulation_date)
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} — {}", self.name, self.date_display())
    }
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&date.format(crate::domain::DATE_FORMAT))
}

/// The first occurrence of `birthday` on or after `today`.
pub fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday.occurrence_in(today.year())?;
    if this_year < today {
        birthday.occurrence_in(today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move Saturday and Sunday to the following Monday.
pub fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
    match occurrence.weekday() {
        Weekday::Sat => occurrence + Duration::days(2),
        Weekday::Sun => occurrence + Duration::days(1),
        _ => occurrence,
    }
}

/// Check a single record against the window.
pub fn upcoming_for(
    record: &Record,
    today: NaiveDate,
    window_days: i64,
) -> Option<UpcomingBirthday> {
    let birthday = record.birthday()?;
    let occurrence = next_occurrence(birthday, today)?;
    let delta = (occurrence - today).num_days();

    if !(0..=window_days).contains(&delta) {
        return None;
    }

    Some(UpcomingBirthday {
        name: record.name().to_string(),
        congratulation_date: congratulation_date(occurrence),
    })
}

/// Collect upcoming birthdays in iteration order of `records`.
pub fn upcoming_birthdays<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    today: NaiveDate,
    window_days: i64,
) -> Vec<UpcomingBirthday> {
    let upcoming: Vec<UpcomingBirthday> = records
        .into_iter()
        .filter_map(|record| upcoming_for(record, today, window_days))
        .collect();

    tracing::debug!(
        today = %today,
        window_days,
        count = upcoming.len(),
        "Computed upcoming birthdays"
    );

    upcoming
}
