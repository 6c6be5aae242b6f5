//! Contact service layer.
//!
//! Applies user operations to the address book and persists the book after
//! every mutation that succeeds.

use crate::clock::Clock;
use crate::domain::ContactName;
use crate::error::{BookError, CommandResult, StorageResult};
use crate::models::{AddressBook, Record, UpcomingBirthdays, DEFAULT_WINDOW_DAYS};
use crate::repositories::AddressBookRepository;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{error, info};

/// What `add_contact` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new record was created with the phone
    Created,

    /// The phone was appended to an existing record
    PhoneAdded,
}

/// Owns the in-memory book and writes it through the repository.
///
/// A failed validation leaves both the book and the stored copy untouched.
/// A failed save is returned to the caller; the in-memory change stays and
/// the next successful save persists it.
pub struct ContactService {
    book: AddressBook,
    repository: Arc<dyn AddressBookRepository>,
    clock: Arc<dyn Clock>,
    window_days: i64,
}

impl ContactService {
    /// Load the book from `repository`.
    pub fn load(
        repository: Arc<dyn AddressBookRepository>,
        clock: Arc<dyn Clock>,
    ) -> StorageResult<Self> {
        let book = repository.load()?;
        info!(contacts = book.len(), "Contact service ready");
        Ok(Self {
            book,
            repository,
            clock,
            window_days: DEFAULT_WINDOW_DAYS,
        })
    }

    /// Use a lookahead other than the default seven days for upcoming birthdays.
    pub fn with_window_days(mut self, window_days: i64) -> Self {
        self.window_days = window_days;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Add `phone` to `name`, creating the contact if it does not exist yet.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> CommandResult<AddOutcome> {
        let outcome = match self.book.find_mut(name) {
            Some(record) => {
                record.add_phone(phone)?;
                AddOutcome::PhoneAdded
            }
            None => {
                let mut record = Record::new(ContactName::new(name)?);
                record.add_phone(phone)?;
                self.book.add_record(record);
                AddOutcome::Created
            }
        };

        self.save()?;
        Ok(outcome)
    }

    /// Replace `old` with `new` in the phones of `name`.
    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> CommandResult<()> {
        self.record_mut(name)?.edit_phone(old, new)?;
        self.save()?;
        Ok(())
    }

    /// Remove `phone` from `name`. An unknown phone is not an error.
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> CommandResult<()> {
        self.record_mut(name)?.remove_phone(phone);
        self.save()?;
        Ok(())
    }

    /// Delete the contact called `name`.
    pub fn delete_contact(&mut self, name: &str) -> CommandResult<Record> {
        let removed = self.book.delete(name)?;
        self.save()?;
        Ok(removed)
    }

    /// Set the birthday of `name`, validated against today's date.
    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> CommandResult<()> {
        let today = self.today();
        self.record_mut(name)?.add_birthday(birthday, today)?;
        self.save()?;
        Ok(())
    }

    /// Look up a contact by exact name.
    pub fn find(&self, name: &str) -> CommandResult<&Record> {
        self.book
            .find(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()).into())
    }

    /// Birthdays within the configured window, counted from today.
    pub fn upcoming_birthdays(&self) -> UpcomingBirthdays {
        self.book
            .get_upcoming_birthdays_within(self.today(), self.window_days)
    }

    /// Write the book through the repository.
    pub fn save(&self) -> StorageResult<()> {
        self.repository.save(&self.book).map_err(|e| {
            error!("Failed to save address book: {}", e);
            e
        })
    }

    fn record_mut(&mut self, name: &str) -> Result<&mut Record, BookError> {
        self.book
            .find_mut(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::domain::ValidationError;
    use crate::error::CommandError;
    use crate::repositories::JsonFileRepository;
    use tempfile::TempDir;

    fn service(dir: &TempDir) -> (ContactService, Arc<JsonFileRepository>) {
        let repo = Arc::new(JsonFileRepository::new(dir.path().join("book.json")));
        let clock = Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()));
        let service = ContactService::load(repo.clone(), clock).unwrap();
        (service, repo)
    }

    #[test]
    fn test_add_contact_creates_then_appends() {
        let dir = TempDir::new().unwrap();
        let (mut service, repo) = service(&dir);

        assert_eq!(
            service.add_contact("Ann", "1111111111").unwrap(),
            AddOutcome::Created
        );
        assert_eq!(
            service.add_contact("Ann", "2222222222").unwrap(),
            AddOutcome::PhoneAdded
        );

        let stored = repo.load().unwrap();
        assert_eq!(stored.find("Ann").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_contact_invalid_phone_creates_nothing() {
        let dir = TempDir::new().unwrap();
        let (mut service, repo) = service(&dir);

        let err = service.add_contact("Ann", "123").unwrap_err();
        assert!(matches!(
            err,
            CommandError::Book(BookError::Validation(ValidationError::InvalidPhone(_)))
        ));
        assert!(service.book().is_empty());
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_mutations_on_missing_contact_are_not_found() {
        let dir = TempDir::new().unwrap();
        let (mut service, _repo) = service(&dir);

        for result in [
            service.change_phone("Zed", "1111111111", "2222222222"),
            service.remove_phone("Zed", "1111111111"),
            service.add_birthday("Zed", "12.06.1990"),
            service.delete_contact("Zed").map(|_| ()),
        ] {
            assert!(matches!(
                result,
                Err(CommandError::Book(BookError::NotFound(ref name))) if name == "Zed"
            ));
        }
    }

    #[test]
    fn test_add_birthday_uses_clock() {
        let dir = TempDir::new().unwrap();
        let (mut service, _repo) = service(&dir);
        service.add_contact("Ann", "1111111111").unwrap();

        // The fixed clock says 10.06.2024, so 11.06.2024 is in the future.
        assert!(service.add_birthday("Ann", "11.06.2024").is_err());
        service.add_birthday("Ann", "09.06.2024").unwrap();
        assert_eq!(
            service.find("Ann").unwrap().birthday().unwrap().to_string(),
            "09.06.2024"
        );
    }

    #[test]
    fn test_upcoming_birthdays_respects_window() {
        let dir = TempDir::new().unwrap();
        let (mut service, _repo) = service(&dir);
        service.add_contact("Ann", "1111111111").unwrap();
        service.add_birthday("Ann", "20.06.1990").unwrap();

        assert!(service.upcoming_birthdays().is_empty());

        let service = service.with_window_days(14);
        assert_eq!(service.upcoming_birthdays().to_string(), "Thursday: Ann\n");
    }

    #[test]
    fn test_delete_contact_persists() {
        let dir = TempDir::new().unwrap();
        let (mut service, repo) = service(&dir);
        service.add_contact("Ann", "1111111111").unwrap();
        service.add_contact("Bob", "2222222222").unwrap();

        service.delete_contact("Ann").unwrap();
        let stored = repo.load().unwrap();
        assert!(stored.find("Ann").is_none());
        assert!(stored.find("Bob").is_some());
    }
}
