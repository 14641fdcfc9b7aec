//! Redundant token removal.
//!
//! After merging, a phrase often yields tokens that add nothing to an index:
//! exact duplicates, and tokens that are a textual prefix of another token
//! (a prefix query for the longer token already covers them).
//!
//! The scan is a single pass. Indices are visited from last to first; for
//! each candidate the remaining tokens are checked in forward order, and the
//! candidate is dropped as soon as one of them starts with it. The pass is
//! not repeated to a fixpoint.

use crate::analysis::token_filter::Filter;

/// A filter that removes duplicates and prefixes of other tokens.
///
/// # Examples
///
/// ```
/// use shortword::analysis::token_filter::Filter;
/// use shortword::analysis::token_filter::redundancy::RedundancyFilter;
///
/// let filter = RedundancyFilter::new();
/// let tokens = vec!["ab cde".to_string(), "ab".to_string(), "cde".to_string()];
/// assert_eq!(filter.filter(tokens), vec!["ab cde", "cde"]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RedundancyFilter;

impl RedundancyFilter {
    /// Create a new redundancy filter.
    pub fn new() -> Self {
        RedundancyFilter
    }
}

impl Filter for RedundancyFilter {
    fn filter(&self, mut tokens: Vec<String>) -> Vec<String> {
        if tokens.len() < 2 {
            return tokens;
        }

        for i in (0..tokens.len()).rev() {
            let redundant = tokens
                .iter()
                .enumerate()
                .any(|(j, other)| j != i && other.starts_with(tokens[i].as_str()));
            if redundant {
                tokens.remove(i);
            }
        }

        tokens
    }

    fn name(&self) -> &'static str {
        "redundancy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(words: &[&str]) -> Vec<String> {
        RedundancyFilter::new().filter(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn test_single_and_empty() {
        assert!(run(&[]).is_empty());
        assert_eq!(run(&["a"]), vec!["a"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(run(&["mahi", "mahi"]), vec!["mahi"]);
        assert_eq!(run(&["x", "x", "x"]), vec!["x"]);
    }

    #[test]
    fn test_prefix_removed() {
        assert_eq!(run(&["ab cd", "ab"]), vec!["ab cd"]);
        assert_eq!(run(&["ab", "ab cd"]), vec!["ab cd"]);
    }

    #[test]
    fn test_unrelated_kept_in_order() {
        assert_eq!(run(&["lorem", "ipsum"]), vec!["lorem", "ipsum"]);
        assert_eq!(run(&["ab cde", "cde"]), vec!["ab cde", "cde"]);
    }

    #[test]
    fn test_prefix_chain() {
        assert_eq!(run(&["a", "ab", "abc"]), vec!["abc"]);
        assert_eq!(run(&["abc", "a", "ab"]), vec!["abc"]);
    }

    #[test]
    fn test_duplicate_with_extension() {
        // The trailing "ab" duplicates the leading one; the leading one is
        // then a prefix of "abc".
        assert_eq!(run(&["ab", "abc", "ab"]), vec!["abc"]);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(RedundancyFilter::new().name(), "redundancy");
    }
}
