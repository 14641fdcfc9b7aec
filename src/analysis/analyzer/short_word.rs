//! The short-word analyzer.
//!
//! Turns short, noisy phrases (project codes, client references, addresses,
//! names) into index tokens without throwing away one to three letter words.
//!
//! # Architecture
//!
//! 1. Normalize: trim, lowercase, drop noise characters
//! 2. Graph: group bracketed text into parenthetical branches
//! 3. Parse: split every raw leaf into sub-phrases, special tokens and words
//! 4. Merge: flatten the tree, merging short words with a neighbour
//! 5. Filter: drop duplicates and prefixes of other tokens
//!
//! When stop words remove everything, the phrase is analyzed again without
//! them. When even that yields nothing, the phrase minus its delimiters is
//! returned as one token, if anything is left.
//!
//! # Examples
//!
//! ```
//! use shortword::analysis::analyzer::{Analyzer, ShortWordAnalyzer};
//! use shortword::analysis::token_filter::StopFilter;
//!
//! let analyzer = ShortWordAnalyzer::with_stop_filter(Some(StopFilter::new()));
//!
//! assert_eq!(analyzer.analyze("Unit 4 - the Old Mill"), vec!["unit 4", "old", "mill"]);
//! assert_eq!(analyzer.analyze("The"), vec!["the"]);
//! ```

use log::{debug, trace};

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::config::AnalyzerConfig;
use crate::analysis::token::{LeafKind, Token};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::redundancy::RedundancyFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::merge::ShortWordMerger;
use crate::analysis::tokenizer::parenthetical::{GraphOptions, graph_parentheticals};
use crate::analysis::tokenizer::sub_phrase::SubPhraseSplitter;
use crate::analysis::tokenizer::word::is_delimiter;
use crate::error::Result;

/// Characters removed from a phrase before it is parsed.
pub const NOISE_CHARACTERS: &[char] = &['!', '"', '#', '\'', '*', '?', '^', '`'];

/// Trim, lowercase and drop noise characters.
///
/// Lowercasing uses Unicode's locale-independent mapping.
pub fn normalize(phrase: &str) -> String {
    phrase
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !NOISE_CHARACTERS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Analyzer for short, noisy phrases.
pub struct ShortWordAnalyzer {
    options: GraphOptions,
    splitter: SubPhraseSplitter,
    /// Parser without stop words, for the retry pass
    unfiltered: Option<SubPhraseSplitter>,
    merger: ShortWordMerger,
    redundancy: RedundancyFilter,
}

impl ShortWordAnalyzer {
    /// Create an analyzer without stop words.
    pub fn new() -> Self {
        Self::with_stop_filter(None)
    }

    /// Create an analyzer with an optional stop-word set.
    pub fn with_stop_filter(stop_filter: Option<StopFilter>) -> Self {
        let unfiltered = stop_filter.as_ref().map(|_| SubPhraseSplitter::new(None));
        ShortWordAnalyzer {
            options: GraphOptions::default(),
            splitter: SubPhraseSplitter::new(stop_filter),
            unfiltered,
            merger: ShortWordMerger::new(),
            redundancy: RedundancyFilter::new(),
        }
    }

    /// Create an analyzer from a configuration, loading stop words as needed.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        let stop_filter = config.stop_words.resolve()?;
        Ok(Self::with_stop_filter(stop_filter).with_options(config.graph_options()))
    }

    /// Set the grouping options.
    pub fn with_options(mut self, options: GraphOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the grouping options.
    pub fn options(&self) -> GraphOptions {
        self.options
    }

    /// Check if this analyzer filters stop words.
    pub fn has_stop_filter(&self) -> bool {
        self.splitter.has_stop_filter()
    }

    /// Parse a phrase into its token tree, before merging.
    pub fn parse(&self, text: &str) -> Vec<Token> {
        self.parse_with(&normalize(text), &self.splitter)
    }

    fn parse_with(&self, normalized: &str, splitter: &SubPhraseSplitter) -> Vec<Token> {
        let graph = graph_parentheticals(normalized, self.options);
        trace!("graphed {:?} into {} top-level tokens", normalized, graph.len());
        let tree = self.parse_tokens(graph, splitter);
        trace!(
            "parsed {:?} into {} leaves",
            normalized,
            tree.iter().map(Token::leaf_count).sum::<usize>()
        );
        tree
    }

    fn parse_tokens(&self, tokens: Vec<Token>, splitter: &SubPhraseSplitter) -> Vec<Token> {
        let mut parsed = Vec::with_capacity(tokens.len());

        for token in tokens {
            match token {
                Token::Leaf(leaf) if leaf.kind == LeafKind::Raw => {
                    parsed.extend(splitter.tokenize(&leaf.value));
                }
                Token::Leaf(leaf) => parsed.push(Token::Leaf(leaf)),
                Token::Branch(mut branch) => {
                    let children = std::mem::take(&mut branch.children);
                    branch.children = self.parse_tokens(children, splitter);
                    if branch.children.is_empty() && self.options.remove_empty_entries {
                        continue;
                    }
                    parsed.push(Token::Branch(branch));
                }
            }
        }

        parsed
    }

    fn run(&self, normalized: &str, splitter: &SubPhraseSplitter) -> Vec<String> {
        let tree = self.parse_with(normalized, splitter);
        let merged = self.merger.merge(&tree);
        let before = merged.len();
        let filtered = self.redundancy.filter(merged);
        trace!("{} redundant tokens removed", before - filtered.len());
        filtered
    }
}

impl Default for ShortWordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for ShortWordAnalyzer {
    fn analyze(&self, text: &str) -> Vec<String> {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return Vec::new();
        }

        let tokens = self.run(&normalized, &self.splitter);
        if !tokens.is_empty() {
            return tokens;
        }

        if let Some(unfiltered) = &self.unfiltered {
            debug!("stop words removed every token of {normalized:?}, retrying without them");
            let tokens = self.run(&normalized, unfiltered);
            if !tokens.is_empty() {
                return tokens;
            }
        }

        let remainder: String = normalized.chars().filter(|c| !is_delimiter(*c)).collect();
        if remainder.is_empty() {
            Vec::new()
        } else {
            debug!("no tokens parsed from {normalized:?}, passing {remainder:?} through");
            vec![remainder]
        }
    }

    fn name(&self) -> &'static str {
        "short_word"
    }
}

/// Tokenize one phrase.
///
/// This is the entry point shared by index-time and query-time callers.
/// `None`, blank and pure-noise phrases produce no tokens.
///
/// # Examples
///
/// ```
/// use shortword::tokenize;
///
/// assert_eq!(tokenize("ab - cde", None), vec!["ab cde", "cde"]);
/// assert!(tokenize(None, None).is_empty());
/// ```
pub fn tokenize<'a>(phrase: impl Into<Option<&'a str>>, stop_words: Option<&StopFilter>) -> Vec<String> {
    match phrase.into() {
        Some(phrase) => ShortWordAnalyzer::with_stop_filter(stop_words.cloned()).analyze(phrase),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::BranchKind;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Hello WORLD  "), "hello world");
        assert_eq!(normalize("it's \"fine\"!"), "its fine");
        assert_eq!(normalize("?!*"), "");
        assert_eq!(normalize("ÄBC"), "äbc");
        assert_eq!(normalize("# 12"), "12");
    }

    #[test]
    fn test_empty_inputs() {
        let analyzer = ShortWordAnalyzer::new();
        assert!(analyzer.analyze("").is_empty());
        assert!(analyzer.analyze("   ").is_empty());
        assert!(analyzer.analyze("!?!").is_empty());
        assert!(analyzer.analyze("()").is_empty());
        assert!(analyzer.analyze("- , -").is_empty());
    }

    #[test]
    fn test_basic_phrases() {
        let analyzer = ShortWordAnalyzer::new();
        assert_eq!(analyzer.analyze("lorem ipsum"), vec!["lorem", "ipsum"]);
        assert_eq!(analyzer.analyze("mahi mahi"), vec!["mahi"]);
        assert_eq!(analyzer.analyze("(P)"), vec!["(p)"]);
        assert_eq!(analyzer.analyze("abc - def"), vec!["abc", "def"]);
        assert_eq!(analyzer.analyze("ab - cde"), vec!["ab cde", "cde"]);
    }

    #[test]
    fn test_stop_word_retry() {
        let analyzer = ShortWordAnalyzer::with_stop_filter(Some(StopFilter::from_words(vec!["the"])));
        assert_eq!(analyzer.analyze("the"), vec!["the"]);
        assert_eq!(analyzer.analyze("the mill"), vec!["mill"]);
    }

    #[test]
    fn test_parse_tree() {
        let analyzer = ShortWordAnalyzer::new();
        let tree = analyzer.parse("Suite 4 & Lot 7 (Rear)");
        assert_eq!(
            tree,
            vec![
                Token::branch(
                    BranchKind::SubPhrase,
                    vec![Token::literal("suite"), Token::literal("4")]
                ),
                Token::branch(
                    BranchKind::SubPhrase,
                    vec![Token::literal("lot"), Token::literal("7")]
                ),
                Token::branch(BranchKind::Parenthetical, vec![Token::literal("rear")]),
            ]
        );

        // Raw text is trimmed around brackets, so a delimiter right after a
        // group no longer splits anything.
        let tree = analyzer.parse("Suite 4 (Rear) & Lot 7");
        assert_eq!(tree.len(), 5);
        assert_eq!(tree[3], Token::literal("lot"));
    }

    #[test]
    fn test_parse_tree_with_sub_phrases_and_group() {
        let analyzer = ShortWordAnalyzer::new();
        assert_eq!(
            analyzer.parse("Unit 4B & P.O. Box (North Wing)"),
            vec![
                Token::branch(
                    BranchKind::SubPhrase,
                    vec![Token::literal("unit"), Token::literal("4b")]
                ),
                Token::branch(
                    BranchKind::SubPhrase,
                    vec![Token::literal("po"), Token::literal("box")]
                ),
                Token::branch(
                    BranchKind::Parenthetical,
                    vec![Token::literal("north"), Token::literal("wing")]
                ),
            ]
        );
    }

    #[test]
    fn test_parenthetical_emptied_by_stop_words() {
        let analyzer = ShortWordAnalyzer::with_stop_filter(Some(StopFilter::from_words(vec!["the"])));
        let tree = analyzer.parse("mill (the)");
        assert_eq!(tree, vec![Token::literal("mill")]);

        let keep = analyzer.with_options(GraphOptions::keep_empty());
        assert_eq!(
            keep.parse("mill (the)"),
            vec![
                Token::literal("mill"),
                Token::branch(BranchKind::Parenthetical, Vec::new()),
            ]
        );
    }

    #[test]
    fn test_from_config() {
        let config = AnalyzerConfig::builder()
            .stop_words(crate::analysis::analyzer::config::StopWordsConfig::English)
            .build();
        let analyzer = ShortWordAnalyzer::from_config(&config).unwrap();
        assert!(analyzer.has_stop_filter());
        assert_eq!(analyzer.analyze("the old mill"), vec!["old", "mill"]);
    }

    #[test]
    fn test_tokenize_function() {
        assert!(tokenize(None, None).is_empty());
        assert!(tokenize("", None).is_empty());
        assert_eq!(
            tokenize("the", Some(&StopFilter::from_words(vec!["the"]))),
            vec!["the"]
        );
    }

    #[test]
    fn test_analyzer_name() {
        assert_eq!(ShortWordAnalyzer::new().name(), "short_word");
    }
}
