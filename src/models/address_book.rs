//! The address book: every record, keyed by contact name.

use super::record::Record;
use super::upcoming::{CelebrationDay, UpcomingBirthdays};
use crate::error::{BookError, BookResult};
use chrono::{Datelike, NaiveDate};
use tracing::debug;

/// Lookahead of the upcoming-birthday query, in days, today included.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Records keyed by name.
///
/// Iteration follows the order in which names were first added; replacing
/// a record keeps its position. Books are small, so lookups scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name.
    ///
    /// An existing record with the same name is replaced outright, phones and
    /// birthday included. Nothing is merged.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => {
                debug!(contact = %record.name(), "Replacing record");
                self.records[index] = record;
            }
            None => {
                debug!(contact = %record.name(), "Adding record");
                self.records.push(record);
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove and return the record called `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` when no such record exists.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let index = self
            .position(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;

        debug!(contact = name, "Deleting record");
        Ok(self.records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in book order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Contact names in book order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name().as_str())
    }

    /// Birthdays in the next [`DEFAULT_WINDOW_DAYS`] days, grouped by day.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> UpcomingBirthdays {
        self.get_upcoming_birthdays_within(today, DEFAULT_WINDOW_DAYS)
    }

    /// Birthdays whose next occurrence is at most `window_days` after `today`.
    ///
    /// A birthday falling on a Saturday or Sunday is reported under
    /// `Next Monday`. Records without a birthday are skipped.
    pub fn get_upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        window_days: i64,
    ) -> UpcomingBirthdays {
        let mut upcoming = UpcomingBirthdays::new();

        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let next = birthday.next_occurrence(today);
            let days_until = (next - today).num_days();
            if days_until > window_days {
                continue;
            }

            let day = CelebrationDay::for_weekday(next.weekday());
            upcoming.push(day, record.name().as_str());
        }

        debug!(
            today = %today,
            window_days,
            days = upcoming.days().count(),
            "Computed upcoming birthdays"
        );
        upcoming
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}
