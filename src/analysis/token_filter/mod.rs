//! Token filter implementations for token string transformation.

/// Trait for filters that transform lists of token strings.
pub trait Filter: Send + Sync {
    /// Apply this filter to a list of tokens, preserving order.
    fn filter(&self, tokens: Vec<String>) -> Vec<String>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod redundancy;
pub mod stop;

// Re-export all filters for convenient access
pub use redundancy::RedundancyFilter;
pub use stop::StopFilter;
