//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Required number of digits in a phone number.
pub const PHONE_LENGTH: usize = 10;

/// A type-safe wrapper for phone numbers.
///
/// A phone number is exactly ten ASCII digits. Nothing is normalized: no
/// stripping of spaces, no country codes. Two numbers are equal when their
/// digit strings are equal.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// assert!(PhoneNumber::new("050-123-45").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the input is exactly
    /// ten ASCII digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Validate phone format.
    pub fn is_valid(phone: &str) -> bool {
        // Byte length is fine here: any non-ASCII char fails the digit check.
        phone.len() == PHONE_LENGTH && phone.bytes().all(|b| b.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl PartialEq<str> for PhoneNumber {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("0123456789").unwrap();
        assert_eq!(phone.as_str(), "0123456789");
        assert_eq!(phone.to_string(), "0123456789");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("123456789").is_err());
        assert!(PhoneNumber::new("12345678901").is_err());
        assert!(PhoneNumber::new("12345abcde").is_err());
        assert!(PhoneNumber::new("+123456789").is_err());
        assert!(PhoneNumber::new(" 123456789").is_err());
        assert!(PhoneNumber::new("123-456-78").is_err());
        assert!(PhoneNumber::new("0000000000").is_ok());
        assert!(PhoneNumber::new("9999999999").is_ok());
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not ASCII.
        assert!(PhoneNumber::new("١٢٣٤٥٦٧٨٩٠").is_err());
        // Five two-byte chars add up to ten bytes.
        assert!(PhoneNumber::new("ééééé").is_err());
    }

    #[test]
    fn test_phone_error_carries_input() {
        assert_eq!(
            PhoneNumber::new("abc"),
            Err(ValidationError::InvalidPhone("abc".to_string()))
        );
    }

    #[test]
    fn test_phone_every_ten_digit_string_round_trips() {
        for d in 0..10u8 {
            let raw: String = (0..10).map(|i| char::from(b'0' + (d + i) % 10)).collect();
            let phone = PhoneNumber::new(raw.clone()).unwrap();
            assert_eq!(phone.into_inner(), raw);
        }
    }

    #[test]
    fn test_phone_compares_with_str() {
        let phone = PhoneNumber::new("1111111111").unwrap();
        assert!(phone == *"1111111111");
        assert!(phone != *"2222222222");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("0123456789").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"0123456789\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}
