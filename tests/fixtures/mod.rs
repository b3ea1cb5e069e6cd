//! Shared fixtures for integration tests.

use chrono::NaiveDate;
use contact_assistant::{Assistant, ContactDirectory, Record};

/// Build a date from day, month, year (the order used in the UI).
#[allow(dead_code)]
pub fn date(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date must exist")
}

/// Create a record with a birthday and no phones.
#[allow(dead_code)]
pub fn record_with_birthday(name: &str, birthday: &str) -> Record {
    let mut record = Record::with_name(name).unwrap();
    record.set_birthday(birthday).unwrap();
    record
}

/// Create a directory from (name, birthday) pairs, in order.
#[allow(dead_code)]
pub fn directory_with_birthdays(entries: &[(&str, &str)]) -> ContactDirectory {
    let mut directory = ContactDirectory::new();
    for (name, birthday) in entries {
        directory.upsert(record_with_birthday(name, birthday));
    }
    directory
}

/// An assistant pinned to `today` with the default seven-day window.
#[allow(dead_code)]
pub fn assistant_on(today: NaiveDate) -> Assistant {
    Assistant::new(today, 7)
}

/// Run a line and return the printed text ("" when nothing is printed).
#[allow(dead_code)]
pub fn say(assistant: &mut Assistant, line: &str) -> String {
    assistant
        .handle_line(line)
        .text()
        .unwrap_or_default()
        .to_string()
}
