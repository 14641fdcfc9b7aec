//! Analyzers that combine the parsing stages and filters.

mod analyzer;
mod config;
mod short_word;

pub use analyzer::Analyzer;
pub use config::{AnalyzerConfig, AnalyzerConfigBuilder, StopWordsConfig};
pub use short_word::{NOISE_CHARACTERS, ShortWordAnalyzer, normalize, tokenize};
