//! Stop filter implementation.
//!
//! Stop words are removed late in phrase analysis: after a word has been
//! split on secondary punctuation and its short tail folded back in, so a
//! multi-part token like `at-t` is never mistaken for the stop word `at`.
//!
//! # Examples
//!
//! ```
//! use shortword::analysis::token_filter::Filter;
//! use shortword::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::new(); // Uses default English stop words
//! let tokens = vec!["the".to_string(), "quick".to_string(), "fox".to_string()];
//!
//! assert_eq!(filter.filter(tokens), vec!["quick", "fox"]);
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default English stop words list.
///
/// Common English words that are typically filtered out during indexing.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A read-only set of stop words.
///
/// Words are lowercased on construction so they compare against normalized
/// phrase text. Cloning is cheap; the set is shared.
///
/// # Examples
///
/// ```
/// use shortword::analysis::token_filter::stop::StopFilter;
///
/// let filter = StopFilter::from_words(vec!["Rue", "Via"]);
/// assert!(filter.is_stop_word("rue"));
/// assert!(!filter.is_stop_word("main"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_ENGLISH_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words.into_iter().map(|w| w.to_lowercase()).collect()),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Parse a stop-word list: one word per line, blank lines and lines
    /// starting with `#` are ignored.
    pub fn parse_list(content: &str) -> Self {
        Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Load a stop-word list from a file (see [`StopFilter::parse_list`]).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse_list(&content))
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|token| !self.is_stop_word(token))
            .collect()
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::from_words(vec!["the", "and", "or"]);
        let result = filter.filter(strings(&["hello", "the", "world", "and", "test"]));
        assert_eq!(result, vec!["hello", "world", "test"]);
    }

    #[test]
    fn test_default_english() {
        let filter = StopFilter::new();
        assert_eq!(filter.len(), 33);
        assert!(filter.is_stop_word("with"));
        assert!(!filter.is_stop_word("mahi"));
    }

    #[test]
    fn test_words_are_lowercased() {
        let filter = StopFilter::from_words(vec!["DE", "La"]);
        assert!(filter.is_stop_word("de"));
        assert!(filter.is_stop_word("la"));
        assert!(!filter.is_stop_word("DE"));
    }

    #[test]
    fn test_parse_list() {
        let filter = StopFilter::parse_list("# french\nde\n\n  la \nle\n");
        assert_eq!(filter.len(), 3);
        assert!(filter.is_stop_word("la"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "von").unwrap();
        writeln!(file, "der").unwrap();

        let filter = StopFilter::from_file(file.path()).unwrap();
        assert_eq!(filter.len(), 2);
        assert!(filter.is_stop_word("von"));
    }

    #[test]
    fn test_from_missing_file() {
        assert!(StopFilter::from_file("/nonexistent/stop-words.txt").is_err());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
    }
}
