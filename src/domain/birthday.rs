//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Canonical text form of a birthday, as typed by users and stored on disk.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Upper bound on a contact's age, in 365-day years.
pub const MAX_AGE_YEARS: f64 = 120.0;

/// Days in the approximate year used by the age bound.
const DAYS_PER_YEAR: f64 = 365.0;

/// A validated date of birth.
///
/// The date must be strictly before the reference day and less than 120
/// years before it. Years are counted as `days / 365`, ignoring leap days,
/// so the bound sits a month or so short of 120 calendar years. Existing
/// stored data was accepted under that rule; keep it.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
/// let birthday = Birthday::new("12.06.1990", today).unwrap();
/// assert_eq!(birthday.to_string(), "12.06.1990");
/// assert!(Birthday::new("12.06.2030", today).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, validating format and range against `today`.
    ///
    /// # Errors
    ///
    /// - `ValidationError::InvalidBirthdayFormat` if `raw` is not a real
    ///   calendar date written as `DD.MM.YYYY`
    /// - `ValidationError::BirthdayOutOfRange` if the date is not before
    ///   `today` or is 120 or more (365-day) years before it
    pub fn new(raw: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        let birthday = Self::parse(raw)?;

        if !Self::is_in_range(birthday.0, today) {
            return Err(ValidationError::BirthdayOutOfRange(raw.to_string()));
        }

        Ok(birthday)
    }

    /// Parse a `DD.MM.YYYY` string without the range check.
    ///
    /// Used for values that were range-checked when first entered, such as
    /// birthdays read back from storage.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthdayFormat` on any deviation from
    /// the two-digit day, two-digit month, four-digit year layout, or if the
    /// date does not exist.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !Self::has_canonical_shape(raw) {
            return Err(ValidationError::InvalidBirthdayFormat(raw.to_string()));
        }

        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthdayFormat(raw.to_string()))
    }

    /// `DD.MM.YYYY` with ASCII digits only; chrono alone would also accept
    /// unpadded or signed fields.
    fn has_canonical_shape(raw: &str) -> bool {
        let parts: Vec<&str> = raw.split('.').collect();
        let widths = [2, 2, 4];

        parts.len() == widths.len()
            && parts
                .iter()
                .zip(widths)
                .all(|(part, width)| part.len() == width && part.bytes().all(|b| b.is_ascii_digit()))
    }

    fn is_in_range(date: NaiveDate, today: NaiveDate) -> bool {
        let elapsed_days = (today - date).num_days();
        let elapsed_years = elapsed_days as f64 / DAYS_PER_YEAR;

        today > date && elapsed_years < MAX_AGE_YEARS
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The next anniversary on or after `today`.
    ///
    /// A 29 February birthday falls on 1 March in common years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.anniversary_in(today.year());
        if this_year < today {
            self.anniversary_in(today.year() + 1)
        } else {
            this_year
        }
    }

    fn anniversary_in(&self, year: i32) -> NaiveDate {
        // Only 29 February can be missing from a year; 1 March always exists.
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .unwrap_or(self.0)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Storage holds values that already passed the range check on entry.
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
