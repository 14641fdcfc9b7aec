//! Configuration for the short-word analyzer.
//!
//! Configuration is plain serde data so it can live in a JSON file next to
//! whatever indexes the tokens:
//!
//! ```json
//! {
//!   "remove_empty_entries": true,
//!   "max_depth": 32,
//!   "stop_words": { "type": "file", "path": "stop-words/fr.txt" }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::parenthetical::{DEFAULT_MAX_DEPTH, GraphOptions};
use crate::error::{Result, ShortwordError};

/// Where the stop-word set comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StopWordsConfig {
    /// No stop-word filtering
    #[default]
    None,
    /// The built-in English list
    English,
    /// An inline list
    Custom { words: Vec<String> },
    /// A file with one word per line
    File { path: PathBuf },
}

impl StopWordsConfig {
    /// Build the stop filter this configuration describes.
    pub fn resolve(&self) -> Result<Option<StopFilter>> {
        match self {
            StopWordsConfig::None => Ok(None),
            StopWordsConfig::English => Ok(Some(StopFilter::new())),
            StopWordsConfig::Custom { words } => Ok(Some(StopFilter::from_words(words.clone()))),
            StopWordsConfig::File { path } => StopFilter::from_file(path).map(Some),
        }
    }
}

/// Configuration for [`ShortWordAnalyzer`](super::ShortWordAnalyzer).
///
/// # Example
///
/// ```
/// use shortword::analysis::analyzer::{AnalyzerConfig, StopWordsConfig};
///
/// let config = AnalyzerConfig::builder()
///     .max_depth(8)
///     .stop_words(StopWordsConfig::English)
///     .build();
///
/// assert_eq!(config.max_depth, 8);
/// assert!(config.remove_empty_entries);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Drop bracket groups that contain no tokens
    pub remove_empty_entries: bool,
    /// Bracket nesting depth that is still grouped
    pub max_depth: usize,
    /// Stop-word source
    pub stop_words: StopWordsConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            remove_empty_entries: true,
            max_depth: DEFAULT_MAX_DEPTH,
            stop_words: StopWordsConfig::None,
        }
    }
}

impl AnalyzerConfig {
    /// Create a new builder for AnalyzerConfig.
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::new()
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AnalyzerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the analyzer cannot use.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(ShortwordError::config("max_depth must be at least 1"));
        }
        Ok(())
    }

    /// The grouping options this configuration describes.
    pub fn graph_options(&self) -> GraphOptions {
        GraphOptions {
            remove_empty_entries: self.remove_empty_entries,
            max_depth: self.max_depth,
        }
    }
}

/// Builder for AnalyzerConfig.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    /// Create a builder starting from the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether empty bracket groups are dropped.
    pub fn remove_empty_entries(mut self, remove: bool) -> Self {
        self.config.remove_empty_entries = remove;
        self
    }

    /// Set the bracket nesting limit.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Set the stop-word source.
    pub fn stop_words(mut self, stop_words: StopWordsConfig) -> Self {
        self.config.stop_words = stop_words;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> AnalyzerConfig {
        self.config
    }
}
