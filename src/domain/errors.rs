//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// A failed validation never mutates the owner of the value: the caller
/// gets this error back and the previous state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday does not parse as `DD.MM.YYYY`.
    InvalidBirthdayFormat(String),

    /// The birthday is in the future or more than 120 years ago.
    BirthdayOutOfRange(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number: {}, phone should be 10 digits", phone)
            }
            Self::InvalidBirthdayFormat(value) => write!(
                f,
                "Incorrect birthday format: {}, should be DD.MM.YYYY",
                value
            ),
            Self::BirthdayOutOfRange(value) => write!(
                f,
                "Birthday out of range: {}, should be in the past and less than 120 years ago",
                value
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "Contact name cannot be empty"
        );
        assert!(ValidationError::InvalidPhone("123".to_string())
            .to_string()
            .contains("10 digits"));
        assert!(ValidationError::InvalidBirthdayFormat("1990-06-12".to_string())
            .to_string()
            .contains("DD.MM.YYYY"));
        assert!(ValidationError::BirthdayOutOfRange("01.01.2999".to_string())
            .to_string()
            .contains("out of range"));
    }
}
