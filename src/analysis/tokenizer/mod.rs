//! Phrase parsing stages.
//!
//! Each stage turns text (or a tree of tokens) into a more structured form:
//!
//! - [`bracket`] - Finds the first balanced bracket span
//! - [`parenthetical`] - Groups bracketed text into branches
//! - [`sub_phrase`] - Splits at strong relational delimiters
//! - [`special`] - Extracts dates, money, dimensions and similar values
//! - [`word`] - Splits plain text into words
//! - [`merge`] - Flattens the tree, merging short words with neighbours

use crate::analysis::token::Token;

/// Trait for stages that parse raw text into tokens.
///
/// The trait requires `Send + Sync` so parsers can be shared between threads.
pub trait Tokenizer: Send + Sync {
    /// Parse the given text into tokens.
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod bracket;
pub mod merge;
pub mod parenthetical;
pub mod special;
pub mod sub_phrase;
pub mod word;

// Re-export the main entry points for convenient access
pub use bracket::{ParentheticalMatch, match_parenthetical};
pub use merge::ShortWordMerger;
pub use parenthetical::{GraphOptions, graph_parentheticals};
pub use special::SpecialTokenExtractor;
pub use sub_phrase::SubPhraseSplitter;
pub use word::WordSplitter;
