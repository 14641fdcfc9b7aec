//! Word splitting with short-tail folding.
//!
//! Text is split on whitespace, then each word on secondary punctuation. A
//! trailing fragment of at most two characters is folded back onto its
//! neighbour with a hyphen, so `at&t` stays one piece (`at-t`) instead of
//! producing a dangling `t`. Stop words are removed after this step.

use crate::analysis::token::Token;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::Tokenizer;

/// Punctuation that separates parts of a single whitespace-delimited word.
pub const SECONDARY_DELIMITERS: &[char] = &[
    '&', '(', ')', '+', ',', '-', '–', '—', '.', '[', '/', ']', ':', ';', '<', '=', '>', '@',
    '\\', '_', '{', '|', '}', '~',
];

/// Longest trailing fragment that gets folded onto the previous part.
const MAX_FOLDED_TAIL: usize = 2;

/// Check if a character splits words or word parts.
pub fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || SECONDARY_DELIMITERS.contains(&c)
}

/// Splits plain text into literal leaves.
///
/// # Examples
///
/// ```
/// use shortword::analysis::tokenizer::Tokenizer;
/// use shortword::analysis::tokenizer::word::WordSplitter;
///
/// let splitter = WordSplitter::new();
/// let words: Vec<_> = splitter
///     .tokenize("at&t store-front")
///     .iter()
///     .filter_map(|t| t.value().map(str::to_string))
///     .collect();
/// assert_eq!(words, vec!["at-t", "store", "front"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordSplitter {
    stop_filter: Option<StopFilter>,
}

impl WordSplitter {
    /// Create a word splitter without stop words.
    pub fn new() -> Self {
        WordSplitter { stop_filter: None }
    }

    /// Create a word splitter that drops the given stop words.
    pub fn with_stop_filter(stop_filter: Option<StopFilter>) -> Self {
        WordSplitter { stop_filter }
    }

    /// Get the stop filter, if any.
    pub fn stop_filter(&self) -> Option<&StopFilter> {
        self.stop_filter.as_ref()
    }

    /// Split one whitespace-free word into its parts.
    pub fn split_word(word: &str) -> Vec<String> {
        let mut parts: Vec<String> = word
            .split(SECONDARY_DELIMITERS)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect();

        let folds = parts.len() >= 2
            && parts
                .last()
                .is_some_and(|tail| tail.chars().count() <= MAX_FOLDED_TAIL);
        if folds {
            if let (Some(tail), Some(head)) = (parts.pop(), parts.pop()) {
                parts.push(format!("{head}-{tail}"));
            }
        }

        parts
    }
}

impl Tokenizer for WordSplitter {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .flat_map(|word| {
                let parts = Self::split_word(word);
                match &self.stop_filter {
                    Some(stop_filter) => stop_filter.filter(parts),
                    None => parts,
                }
            })
            .map(Token::literal)
            .collect()
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
