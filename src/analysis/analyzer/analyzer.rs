//! Core analyzer trait definition.
//!
//! An analyzer is the complete path from a raw phrase to index tokens:
//!
//! ```text
//! Raw phrase → normalize → graph → parse → merge → filter → tokens
//! ```
//!
//! Index-time and query-time callers go through the same trait so that both
//! sides of a search produce tokens the same way.

/// Trait for analyzers that convert phrases into index tokens.
///
/// Analysis is total: any input yields a (possibly empty) token list.
///
/// # Examples
///
/// ```
/// use shortword::analysis::analyzer::{Analyzer, ShortWordAnalyzer};
///
/// let analyzer = ShortWordAnalyzer::new();
/// assert_eq!(analyzer.analyze("Lorem Ipsum"), vec!["lorem", "ipsum"]);
/// assert_eq!(analyzer.name(), "short_word");
/// ```
pub trait Analyzer: Send + Sync {
    /// Analyze the given phrase and return its index tokens in order.
    fn analyze(&self, text: &str) -> Vec<String>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
