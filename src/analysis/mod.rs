//! Phrase analysis module for shortword.
//!
//! This module provides the tokenization pipeline: parsing stages, the token
//! tree they build, filters over the resulting token strings, and the
//! analyzer that ties them together.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
