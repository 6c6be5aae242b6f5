//! Fuzzy name matching for "did you mean" suggestions.
//!
//! When a command names a contact that does not exist, the assistant offers
//! the closest existing names. Scores use:
//! - Exact match after normalization (95)
//! - Substring containment (scaled 10-95)
//! - Levenshtein similarity (0-85, zero past half the length)

/// Lowest score a name needs to be suggested.
pub const MIN_SUGGESTION_SCORE: u8 = 40;

/// Names offered for an unknown contact unless configured otherwise.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

/// A candidate name with its similarity score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSuggestion {
    /// The existing contact name
    pub name: String,

    /// Similarity score (0-95)
    pub score: u8,
}

/// Scores contact names against a misspelled query.
#[derive(Debug, Default, Clone, Copy)]
pub struct NameMatcher;

impl NameMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Best matching names for `query`, highest score first, then by name.
    ///
    /// At most `max_results` names scoring [`MIN_SUGGESTION_SCORE`] or more.
    pub fn suggest<'a, I>(&self, query: &str, names: I, max_results: usize) -> Vec<NameSuggestion>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let query = Self::normalize_name(query);

        let mut results: Vec<NameSuggestion> = names
            .into_iter()
            .filter_map(|name| {
                let score = Self::calculate_fuzzy_score(&query, &Self::normalize_name(name));
                (score >= MIN_SUGGESTION_SCORE).then(|| NameSuggestion {
                    name: name.to_string(),
                    score,
                })
            })
            .collect();

        results.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
        results.truncate(max_results);
        results
    }

    /// Similarity of two normalized names, 0-95.
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        if target.contains(query) {
            let ratio = query.chars().count() as f64 / target.chars().count() as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Edit distance over chars, two rows at a time.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s2_chars: Vec<char> = s2.chars().collect();
        let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut current = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1.chars().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = usize::from(c1 != *c2);
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2_chars.len()]
    }

    /// Lowercase and collapse whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}
