//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured through `dotenvy`.

use crate::error::{ConfigError, ConfigResult};
use crate::matching::DEFAULT_MAX_SUGGESTIONS;
use crate::models::DEFAULT_WINDOW_DAYS;
use std::env;
use std::path::PathBuf;

/// Default storage file, relative to the working directory.
pub const DEFAULT_BOOK_PATH: &str = "address_book.json";

/// Largest accepted upcoming-birthday window.
pub const MAX_WINDOW_DAYS: i64 = 365;

/// Configuration for the address book assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book is stored (default: `address_book.json`)
    pub book_path: PathBuf,

    /// Days ahead covered by `next-birthdays` (default: 7)
    pub upcoming_window_days: i64,

    /// Maximum number of "did you mean" names offered (default: 3)
    pub max_name_suggestions: usize,

    /// Log filter used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: Storage file (default: `address_book.json`)
    /// - `UPCOMING_WINDOW_DAYS`: Birthday lookahead in days, 0-365 (default: 7)
    /// - `MAX_NAME_SUGGESTIONS`: Names offered for unknown contacts (default: 3)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let book_path = match env::var("ADDRESS_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_BOOK_PATH),
        };

        let upcoming_window_days = Self::parse_env_i64("UPCOMING_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;
        if !(0..=MAX_WINDOW_DAYS).contains(&upcoming_window_days) {
            return Err(ConfigError::InvalidValue {
                var: "UPCOMING_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_WINDOW_DAYS),
            });
        }

        let max_name_suggestions =
            Self::parse_env_usize("MAX_NAME_SUGGESTIONS", DEFAULT_MAX_SUGGESTIONS)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            book_path,
            upcoming_window_days,
            max_name_suggestions,
            log_level,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            upcoming_window_days: DEFAULT_WINDOW_DAYS,
            max_name_suggestions: DEFAULT_MAX_SUGGESTIONS,
            log_level: "warn".to_string(),
        }
    }
}
