//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A contact: a name, an ordered list of phones and an optional birthday.
///
/// Every mutation validates its input before touching the record, so a
/// failed call leaves the record exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    /// Phones in insertion order; duplicates are kept
    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// No duplicate check is made: adding the same number twice stores it twice.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Replace every phone equal to `old` with `new`.
    ///
    /// When no phone matches `old` the call succeeds without changing the
    /// record, and `new` is not looked at. Otherwise `new` is validated
    /// before anything is replaced.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        if self.find_phone(old).is_none() {
            debug!(contact = %self.name, old, "No phone to edit");
            return Ok(());
        }

        let replacement = PhoneNumber::new(new)?;

        let mut replaced = 0usize;
        for phone in self.phones.iter_mut().filter(|p| **p == *old) {
            *phone = replacement.clone();
            replaced += 1;
        }

        debug!(contact = %self.name, old, new, replaced, "Edited phone");
        Ok(())
    }

    /// Remove every phone equal to `raw`. Removing an unknown number is a no-op.
    pub fn remove_phone(&mut self, raw: &str) {
        let before = self.phones.len();
        self.phones.retain(|p| *p != *raw);
        debug!(
            contact = %self.name,
            phone = raw,
            removed = before - self.phones.len(),
            "Removed phone"
        );
    }

    /// First phone equal to `raw`, in insertion order.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| **p == *raw)
    }

    /// Validate against `today` and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, raw: &str, today: NaiveDate) -> Result<(), ValidationError> {
        let birthday = Birthday::new(raw, today)?;
        debug!(contact = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "Contact name: {}, Phones: {}", self.name, phones.join("; "))?;

        if let Some(birthday) = &self.birthday {
            write!(f, " Birthday: {}", birthday)?;
        }

        Ok(())
    }
}
