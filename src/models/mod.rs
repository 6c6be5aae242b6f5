//! Data models for the address book.
//!
//! This module contains the contact [`Record`], the [`AddressBook`] that
//! holds them, and the [`UpcomingBirthdays`] query result.

pub mod address_book;
pub mod record;
pub mod upcoming;

pub use address_book::{AddressBook, DEFAULT_WINDOW_DAYS};
pub use record::Record;
pub use upcoming::{CelebrationDay, UpcomingBirthdays, NEXT_MONDAY_LABEL};
