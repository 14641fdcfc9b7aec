//! Short-word merging.
//!
//! Short words (fewer than three characters) are too broad to index alone,
//! but they carry meaning next to their neighbours: `unit 4`, `ab cde`. The
//! merger walks the parsed tree depth first and pushes every leaf through a
//! three-slot window (`prev`, `current`, `next`). Each advance decides what to
//! emit for `prev`:
//!
//! - a short `current` is appended to `prev` (`"{prev} {current}"`); when
//!   nothing literal follows, `current` is consumed so it cannot also be
//!   prepended to the next group;
//! - a short `prev` is prepended to `current`, which stays in the window and
//!   is emitted on its own later;
//! - otherwise `prev` is emitted as is.
//!
//! Branches decide how far the window may look. A branch that can stand on
//! its own flushes the window before its leaves are fed, so words are never
//! merged across it. A branch holding a single short word is transparent.
//!
//! # Examples
//!
//! ```
//! use shortword::analysis::token::{BranchKind, Token};
//! use shortword::analysis::tokenizer::merge::ShortWordMerger;
//!
//! let tree = vec![
//!     Token::branch(BranchKind::SubPhrase, vec![Token::literal("ab")]),
//!     Token::branch(BranchKind::SubPhrase, vec![Token::literal("cde")]),
//! ];
//! assert_eq!(ShortWordMerger::new().merge(&tree), vec!["ab cde", "cde"]);
//! ```

use log::trace;

use crate::analysis::token::{Branch, BranchKind, Leaf, LeafKind, Token};

/// Words shorter than this many characters are merged with a neighbour.
pub const SHORT_WORD_LEN: usize = 3;

fn is_short(leaf: &Leaf) -> bool {
    leaf.char_len() < SHORT_WORD_LEN
}

fn join(prev: &Leaf, current: &Leaf) -> String {
    format!("{} {}", prev.value, current.value)
}

/// The sliding window state of a merge pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeWindow {
    prev: Option<Leaf>,
    current: Option<Leaf>,
    next: Option<Leaf>,
    /// Number of leaves fed so far
    leaf_index: usize,
    /// Whether the very first leaf fed was short
    first_leaf_short: bool,
}

impl MergeWindow {
    /// Create an empty window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of leaves fed so far.
    pub fn leaf_index(&self) -> usize {
        self.leaf_index
    }

    /// Shift the window by one and decide what to emit for `prev`.
    pub fn advance(&mut self, incoming: Option<Leaf>) -> Option<String> {
        if let Some(leaf) = &incoming {
            if self.leaf_index == 0 {
                self.first_leaf_short = is_short(leaf);
            }
            self.leaf_index += 1;
        }

        self.prev = self.current.take();
        self.current = self.next.take();
        self.next = incoming;

        let prev = self.prev.as_ref()?;
        let current = match &self.current {
            Some(current) if prev.is_literal() && current.is_literal() => current,
            _ => return Some(prev.value.clone()),
        };

        if is_short(current) {
            let merged = join(prev, current);
            if !self.next.as_ref().is_some_and(Leaf::is_literal) {
                self.current = None;
            }
            Some(merged)
        } else if is_short(prev) {
            Some(join(prev, current))
        } else {
            Some(prev.value.clone())
        }
    }

    /// Feed one leaf, collecting any emitted token.
    pub fn feed(&mut self, leaf: Leaf, out: &mut Vec<String>) {
        if let Some(token) = self.advance(Some(leaf)) {
            out.push(token);
        }
    }

    /// Drain `current` and `next` so nothing in the window merges with what
    /// comes after.
    pub fn flush(&mut self, out: &mut Vec<String>) {
        for _ in 0..2 {
            if let Some(token) = self.advance(None) {
                out.push(token);
            }
        }
    }

    /// Whether a stand-alone branch starting now should flush first.
    ///
    /// Nothing needs flushing before the first leaf. When only one leaf has
    /// been seen and it was short, it is left in the window so it can join
    /// the branch instead of standing alone.
    fn flushes_before_branch(&self) -> bool {
        !(self.leaf_index == 0 || (self.leaf_index == 1 && self.first_leaf_short))
    }
}

/// A parenthetical around a single character, as in `(p)`.
fn single_char_parenthetical(branch: &Branch) -> Option<Leaf> {
    if branch.kind != BranchKind::Parenthetical {
        return None;
    }
    match branch.children.as_slice() {
        [Token::Leaf(leaf)] if leaf.is_literal() && leaf.char_len() == 1 => {
            Some(Leaf::new(LeafKind::Literal, format!("({})", leaf.value)))
        }
        _ => None,
    }
}

/// Whether a branch keeps its words to itself.
fn can_stand_alone(branch: &Branch) -> bool {
    match branch.children.as_slice() {
        [] => false,
        [Token::Branch(_)] => true,
        [Token::Leaf(leaf)] => leaf.is_literal() && !is_short(leaf),
        _ => true,
    }
}

/// Flattens a parsed phrase tree into index tokens.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShortWordMerger;

impl ShortWordMerger {
    /// Create a new merger.
    pub fn new() -> Self {
        ShortWordMerger
    }

    /// Merge the top-level tokens of a parsed phrase.
    pub fn merge(&self, tokens: &[Token]) -> Vec<String> {
        let mut window = MergeWindow::new();
        let mut out = Vec::new();

        for token in tokens {
            self.visit(token, &mut window, &mut out);
        }
        window.flush(&mut out);

        trace!("merged {} leaves into {:?}", window.leaf_index(), out);
        out
    }

    fn visit(&self, token: &Token, window: &mut MergeWindow, out: &mut Vec<String>) {
        let branch = match token {
            Token::Leaf(leaf) => {
                debug_assert!(leaf.is_literal(), "raw leaf reached the merger");
                window.feed(leaf.clone(), out);
                return;
            }
            Token::Branch(branch) => branch,
        };

        if let Some(leaf) = single_char_parenthetical(branch) {
            window.feed(leaf, out);
            return;
        }

        if can_stand_alone(branch) && window.flushes_before_branch() {
            window.flush(out);
        }

        for child in &branch.children {
            self.visit(child, window, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(value: &str) -> Token {
        Token::literal(value)
    }

    fn paren(children: Vec<Token>) -> Token {
        Token::branch(BranchKind::Parenthetical, children)
    }

    fn sub(children: Vec<Token>) -> Token {
        Token::branch(BranchKind::SubPhrase, children)
    }

    fn merge(tokens: Vec<Token>) -> Vec<String> {
        ShortWordMerger::new().merge(&tokens)
    }

    #[test]
    fn test_empty() {
        assert!(merge(Vec::new()).is_empty());
    }

    #[test]
    fn test_long_words_stand_alone() {
        assert_eq!(merge(vec![lit("lorem"), lit("ipsum")]), vec!["lorem", "ipsum"]);
        assert_eq!(
            merge(vec![lit("abc"), lit("def"), lit("ghi")]),
            vec!["abc", "def", "ghi"]
        );
    }

    #[test]
    fn test_single_short_word() {
        assert_eq!(merge(vec![lit("ab")]), vec!["ab"]);
    }

    #[test]
    fn test_short_word_merges_left() {
        assert_eq!(merge(vec![lit("unit"), lit("4")]), vec!["unit 4"]);
    }

    #[test]
    fn test_short_word_merges_both_ways() {
        assert_eq!(
            merge(vec![lit("abc"), lit("de"), lit("fgh")]),
            vec!["abc de", "de fgh", "fgh"]
        );
    }

    #[test]
    fn test_leading_short_word_merges_right() {
        assert_eq!(merge(vec![lit("ab"), lit("cde")]), vec!["ab cde", "cde"]);
    }

    #[test]
    fn test_two_short_words() {
        assert_eq!(merge(vec![lit("ab"), lit("cd")]), vec!["ab cd"]);
    }

    #[test]
    fn test_single_char_parenthetical() {
        assert_eq!(merge(vec![paren(vec![lit("p")])]), vec!["(p)"]);
        assert_eq!(
            merge(vec![lit("abc"), paren(vec![lit("d")])]),
            vec!["abc", "(d)"]
        );
    }

    #[test]
    fn test_short_parenthetical_is_transparent() {
        assert_eq!(
            merge(vec![lit("abc"), paren(vec![lit("de")]), lit("fgh")]),
            vec!["abc de", "de fgh", "fgh"]
        );
    }

    #[test]
    fn test_stand_alone_branch_flushes() {
        assert_eq!(
            merge(vec![sub(vec![lit("abc")]), sub(vec![lit("def")])]),
            vec!["abc", "def"]
        );
        // "de" closes its group instead of joining "fgh".
        assert_eq!(
            merge(vec![
                sub(vec![lit("abc"), lit("de")]),
                sub(vec![lit("fgh")]),
            ]),
            vec!["abc de", "fgh"]
        );
    }

    #[test]
    fn test_short_first_leaf_splices_into_branch() {
        assert_eq!(
            merge(vec![sub(vec![lit("ab")]), sub(vec![lit("cde")])]),
            vec!["ab cde", "cde"]
        );
        assert_eq!(
            merge(vec![lit("ab"), paren(vec![lit("cde"), lit("fgh")])]),
            vec!["ab cde", "cde", "fgh"]
        );
    }

    #[test]
    fn test_long_first_leaf_does_not_splice() {
        assert_eq!(
            merge(vec![lit("abc"), paren(vec![lit("de"), lit("fgh")])]),
            vec!["abc", "de fgh", "fgh"]
        );
    }

    #[test]
    fn test_nested_branch_stands_alone() {
        let tree = vec![
            lit("abc"),
            lit("def"),
            paren(vec![paren(vec![lit("gh"), lit("ijk")])]),
        ];
        assert_eq!(merge(tree), vec!["abc", "def", "gh ijk", "ijk"]);
    }

    #[test]
    fn test_empty_branch_skipped() {
        assert_eq!(
            merge(vec![lit("abc"), paren(Vec::new()), lit("de")]),
            vec!["abc de"]
        );
    }

    #[test]
    fn test_window_advance_steps() {
        let mut window = MergeWindow::new();
        assert_eq!(window.advance(Some(Leaf::new(LeafKind::Literal, "abc"))), None);
        assert_eq!(window.advance(Some(Leaf::new(LeafKind::Literal, "de"))), None);
        assert_eq!(
            window.advance(Some(Leaf::new(LeafKind::Literal, "fgh"))),
            Some("abc de".to_string())
        );
        assert_eq!(window.advance(None), Some("de fgh".to_string()));
        assert_eq!(window.advance(None), Some("fgh".to_string()));
        assert_eq!(window.advance(None), None);
        assert_eq!(window.leaf_index(), 3);
    }

    #[test]
    fn test_special_kinds_merge_like_literals() {
        let tree = vec![
            Token::leaf(LeafKind::Dollars, "$5"),
            lit("each"),
        ];
        assert_eq!(merge(tree), vec!["$5 each", "each"]);
    }
}
