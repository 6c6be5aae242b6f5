//! Test fixtures and sample data.
//!
//! Reusable dates, records and books for the integration tests.

#![allow(dead_code)]

use address_book::domain::ContactName;
use address_book::models::{AddressBook, Record};
use chrono::NaiveDate;

/// Build a date from day, month, year (the order users type them in).
pub fn date(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// 10.06.2024, a Monday.
pub fn monday() -> NaiveDate {
    date(10, 6, 2024)
}

/// A record with the given phones and no birthday.
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(ContactName::new(name).expect("valid fixture name"));
    for phone in phones {
        record.add_phone(phone).expect("valid fixture phone");
    }
    record
}

/// A record with one phone and a birthday validated against [`monday`].
pub fn sample_record_with_birthday(name: &str, birthday: &str) -> Record {
    let mut record = sample_record(name, &["0123456789"]);
    record
        .add_birthday(birthday, monday())
        .expect("valid fixture birthday");
    record
}

/// Build a book from records, in order.
pub fn book_of(records: Vec<Record>) -> AddressBook {
    let mut book = AddressBook::new();
    for record in records {
        book.add_record(record);
    }
    book
}

/// Phones of a record as plain strings.
pub fn phone_strings(record: &Record) -> Vec<String> {
    record
        .phones()
        .iter()
        .map(|p| p.as_str().to_string())
        .collect()
}
