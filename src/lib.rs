//! # shortword
//!
//! A search-index tokenizer for short, noisy phrases: project codes, client
//! references, addresses and proper names.
//!
//! Standard analyzers treat one to three character words as noise. Here they
//! carry signal (unit codes, initials, abbreviations), so instead of being
//! dropped they are merged with a neighbouring word.
//!
//! ## Features
//!
//! - Bracket-aware grouping, tolerant of mismatched brackets
//! - Whole-value extraction of dates, dollar amounts, dimensions, numbers
//!   with units and dotted abbreviations
//! - Short-word merging that respects group boundaries
//! - Duplicate and prefix removal
//! - Stop words with automatic fallback when they would remove everything
//!
//! ## Example
//!
//! ```
//! use shortword::tokenize;
//!
//! assert_eq!(tokenize("Lorem Ipsum", None), vec!["lorem", "ipsum"]);
//! assert_eq!(tokenize("AB - CDE", None), vec!["ab cde", "cde"]);
//! assert_eq!(tokenize("(P)", None), vec!["(p)"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;

pub use analysis::analyzer::tokenize;
pub use analysis::tokenizer::bracket::match_parenthetical;
pub use analysis::tokenizer::parenthetical::graph_parentheticals;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, AnalyzerConfig, ShortWordAnalyzer, StopWordsConfig};
    pub use crate::analysis::token::{Branch, BranchKind, Leaf, LeafKind, Token};
    pub use crate::analysis::token_filter::{Filter, StopFilter};
    pub use crate::analysis::tokenizer::{GraphOptions, ParentheticalMatch};
    pub use crate::error::{Result, ShortwordError};
    pub use crate::{graph_parentheticals, match_parenthetical, tokenize};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
