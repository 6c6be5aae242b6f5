//! Address Book - a command-line contact manager.
//!
//! Stores contacts with their phone numbers and birthdays in a local file and
//! reports whose birthday falls in the coming week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: `Record`, `AddressBook` and the upcoming-birthday query
//! - **clock**: Source of "today" for date-dependent rules
//! - **repositories**: Persistence of the book (JSON file)
//! - **services**: Operations on the book, saved after every change
//! - **matching**: Fuzzy "did you mean" name suggestions
//! - **assistant**: Command parsing, handlers and the interactive loop
//! - **config**: Configuration from environment variables
//! - **error**: Error types for precise error handling

pub mod assistant;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod repositories;
pub mod services;

pub use assistant::{Assistant, Command, Reply};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use matching::{NameMatcher, NameSuggestion};
pub use models::{AddressBook, CelebrationDay, Record, UpcomingBirthdays};
pub use repositories::{AddressBookRepository, JsonFileRepository};
pub use services::{AddOutcome, ContactService};
