//! In-memory contact directory.
//!
//! Records are keyed by exact name and kept in insertion order, which is the
//! order used by `all` and by the upcoming birthdays report.

pub mod birthdays;

pub use birthdays::{UpcomingBirthday, DEFAULT_WINDOW_DAYS};

use crate::models::Record;
use chrono::NaiveDate;
use std::collections::HashMap;

/// The name-keyed collection of all records.
///
/// Holds at most one record per name. Lookups are exact and case-sensitive
/// and go through a name index; the records themselves stay in a `Vec` so
/// iteration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory {
    records: Vec<Record>,
    // name -> position in `records`
    index: HashMap<String, usize>,
}

impl ContactDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    fn push(&mut self, record: Record) -> usize {
        tracing::debug!(name = %record.name(), "Inserting record");
        let position = self.records.len();
        self.index.insert(record.name().as_str().to_string(), position);
        self.records.push(record);
        position
    }

    /// Store `record` under its name.
    ///
    /// A new name is appended at the end. An existing name is overwritten in
    /// place and keeps its position in iteration order.
    pub fn upsert(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(position) => {
                tracing::debug!(name = %record.name(), "Replacing record");
                self.records[position] = record;
            }
            None => {
                self.push(record);
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|position| &self.records[position])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.position(name).map(|position| &mut self.records[position])
    }

    /// Get the record for `name`, creating an empty one if it is unknown.
    ///
    /// The flag is `true` when the record was created by this call.
    pub fn find_or_insert(&mut self, record: Record) -> (&mut Record, bool) {
        match self.position(record.name().as_str()) {
            Some(position) => (&mut self.records[position], false),
            None => {
                let position = self.push(record);
                (&mut self.records[position], true)
            }
        }
    }

    /// Remove the record for `name`. Unknown names are ignored.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let position = self.index.remove(name)?;
        tracing::debug!(name, "Deleting record");
        let removed = self.records.remove(position);

        // Everything after the gap moved down by one.
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays from `today` through the next seven days.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, DEFAULT_WINDOW_DAYS)
    }

    /// Birthdays from `today` through the next `window_days` days.
    pub fn upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        window_days: i64,
    ) -> Vec<UpcomingBirthday> {
        birthdays::upcoming_birthdays(&self.records, today, window_days)
    }
}

impl<'a> IntoIterator for &'a ContactDirectory {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
