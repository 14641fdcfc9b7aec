//! Sub-phrase splitting at strong relational delimiters.
//!
//! Delimiters such as `" & "` or `", "` separate parts of a phrase that are
//! unrelated to each other. Each part is parsed on its own and wrapped in a
//! [`BranchKind::SubPhrase`] branch so the merge pass never joins words across
//! the delimiter.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::token::{BranchKind, Token};
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::special::{Segment, SpecialTokenExtractor};
use crate::analysis::tokenizer::word::WordSplitter;
use crate::analysis::token_filter::stop::StopFilter;

/// Delimiters between unrelated parts of a phrase, highest priority first.
pub const SUB_PHRASE_DELIMITERS: [&str; 13] = [
    " & ", " + ", ", ", "- ", "– ", "— ", ": ", "; ", "< ", "<=", "=> ", "> ", ">=",
];

/// The `w/` ("with") shorthand at the start of the text or after whitespace.
static WITH_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|\s)w/").expect("valid with-marker regex"));

/// Split `text` at every sub-phrase delimiter.
///
/// The text is scanned left to right; where several delimiters match at the
/// same position the one listed first wins. Pieces are returned untrimmed and
/// may be empty.
pub fn split_sub_phrases(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < text.len() {
        let rest = &text[i..];
        if let Some(delimiter) = SUB_PHRASE_DELIMITERS.iter().find(|d| rest.starts_with(**d)) {
            pieces.push(&text[start..i]);
            i += delimiter.len();
            start = i;
        } else {
            i += rest.chars().next().map_or(1, char::len_utf8);
        }
    }
    pieces.push(&text[start..]);

    pieces
}

/// Parses raw text into leaves, grouped by sub-phrase when needed.
///
/// # Examples
///
/// ```
/// use shortword::analysis::tokenizer::Tokenizer;
/// use shortword::analysis::tokenizer::sub_phrase::SubPhraseSplitter;
///
/// let splitter = SubPhraseSplitter::new(None);
///
/// // One piece: leaves come back unwrapped.
/// assert_eq!(splitter.tokenize("lorem ipsum").len(), 2);
///
/// // Two pieces: one sub-phrase branch each.
/// let tokens = splitter.tokenize("abc - def");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].kind_name(), "sub_phrase");
/// ```
pub struct SubPhraseSplitter {
    extractor: SpecialTokenExtractor,
    words: WordSplitter,
}

impl SubPhraseSplitter {
    /// Create a splitter with the default special-token patterns.
    pub fn new(stop_filter: Option<StopFilter>) -> Self {
        SubPhraseSplitter {
            extractor: SpecialTokenExtractor::new(),
            words: WordSplitter::with_stop_filter(stop_filter),
        }
    }

    /// Check if this splitter removes stop words.
    pub fn has_stop_filter(&self) -> bool {
        self.words.stop_filter().is_some()
    }

    /// Parse one sub-phrase piece: special tokens first, words in between.
    fn parse_piece(&self, piece: &str) -> Vec<Token> {
        let mut leaves = Vec::new();
        for segment in self.extractor.segments(piece) {
            match segment {
                Segment::Special(token) => leaves.push(token),
                Segment::Text(text) => leaves.extend(self.words.tokenize(text)),
            }
        }
        leaves
    }
}

impl Tokenizer for SubPhraseSplitter {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let text = WITH_MARKER.replace_all(text, "${1}");

        let mut groups: Vec<Vec<Token>> = split_sub_phrases(&text)
            .into_iter()
            .map(|piece| self.parse_piece(piece))
            .filter(|leaves| !leaves.is_empty())
            .collect();

        if groups.len() == 1 {
            return groups.pop().unwrap_or_default();
        }

        groups
            .into_iter()
            .map(|leaves| Token::branch(BranchKind::SubPhrase, leaves))
            .collect()
    }

    fn name(&self) -> &'static str {
        "sub_phrase"
    }
}
