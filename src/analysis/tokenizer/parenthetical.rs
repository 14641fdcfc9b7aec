//! Parenthetical grouping.
//!
//! Turns a flat phrase into a sequence of [`Token`]s where bracketed text
//! becomes a [`BranchKind::Parenthetical`] branch and everything else stays a
//! raw leaf. Nested brackets produce nested branches.
//!
//! # Examples
//!
//! ```
//! use shortword::analysis::tokenizer::parenthetical::{graph_parentheticals, GraphOptions};
//!
//! let tokens = graph_parentheticals("suite 4 (rear) lot", GraphOptions::default());
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].value(), Some("suite 4"));
//! assert_eq!(tokens[1].children()[0].value(), Some("rear"));
//! assert_eq!(tokens[2].value(), Some("lot"));
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::token::{BranchKind, Token};
use crate::analysis::tokenizer::bracket::match_parenthetical;

/// Default limit on bracket nesting that is graphed into branches.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Options for [`graph_parentheticals`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    /// Drop parenthetical branches that end up with no children
    pub remove_empty_entries: bool,
    /// Nesting depth beyond which bracket interiors are kept as raw text
    pub max_depth: usize,
}

impl Default for GraphOptions {
    fn default() -> Self {
        GraphOptions {
            remove_empty_entries: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl GraphOptions {
    /// Keep empty branches in the output.
    pub fn keep_empty() -> Self {
        GraphOptions {
            remove_empty_entries: false,
            ..Default::default()
        }
    }
}

/// Group `phrase` into raw leaves and parenthetical branches.
///
/// Leaves are trimmed and never empty. Returns an empty vector for `None`
/// and for blank input.
pub fn graph_parentheticals<'a>(
    phrase: impl Into<Option<&'a str>>,
    options: GraphOptions,
) -> Vec<Token> {
    let Some(phrase) = phrase.into() else {
        return Vec::new();
    };
    let mut tokens = Vec::new();
    graph_into(phrase, options, 0, &mut tokens);
    tokens
}

fn graph_into(phrase: &str, options: GraphOptions, depth: usize, out: &mut Vec<Token>) {
    let mut rest = phrase.trim();

    while !rest.is_empty() {
        let Some(found) = match_parenthetical(rest) else {
            out.push(Token::raw(rest));
            return;
        };

        push_raw(&rest[..found.start], out);

        let interior = found.interior();
        let mut children = Vec::new();
        if depth + 1 >= options.max_depth {
            debug!("bracket nesting exceeds {}, keeping interior raw", options.max_depth);
            push_raw(interior, &mut children);
        } else {
            graph_into(interior, options, depth + 1, &mut children);
        }

        if !(children.is_empty() && options.remove_empty_entries) {
            out.push(Token::branch(BranchKind::Parenthetical, children));
        }

        rest = rest[found.end()..].trim_start();
    }
}

fn push_raw(text: &str, out: &mut Vec<Token>) {
    let text = text.trim();
    if !text.is_empty() {
        out.push(Token::raw(text));
    }
}
