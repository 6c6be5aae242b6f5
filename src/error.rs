//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation errors live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by address book and record operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field failed validation; the book is unchanged
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact with this name exists
    #[error("Contact {0} not found")]
    NotFound(String),
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the storage file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stored document is not a valid address book
    #[error("Corrupt address book in {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to encode the address book
    #[error("Failed to encode address book: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors reported back to the user by the command layer.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Wrong number of arguments for a command
    #[error("Wrong number of arguments. Usage: {usage}")]
    MissingArguments { usage: &'static str },

    /// Domain operation failed
    #[error(transparent)]
    Book(#[from] BookError),

    /// The change was applied in memory but could not be persisted
    #[error("Failed to save address book: {0}")]
    Storage(#[from] StorageError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Book(BookError::Validation(err))
    }
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
