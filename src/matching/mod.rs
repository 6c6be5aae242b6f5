//! Fuzzy matching utilities for contact lookup.
//!
//! This module suggests existing contact names when a lookup misses.

pub mod name_matcher;

pub use name_matcher::{
    NameMatcher, NameSuggestion, DEFAULT_MAX_SUGGESTIONS, MIN_SUGGESTION_SCORE,
};
