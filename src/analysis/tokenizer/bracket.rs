//! Balanced bracket detection.
//!
//! Finds the first outermost balanced bracket span in a string. The matcher
//! understands `()`, `[]` and `{}` and never closes one kind with another,
//! but it tolerates mismatched nesting: a closer reconciles with the nearest
//! opener of its own kind anywhere on the stack, and closers with no opener
//! are ignored.
//!
//! # Examples
//!
//! ```
//! use shortword::analysis::tokenizer::bracket::match_parenthetical;
//!
//! let found = match_parenthetical("abc{def(ghi]jkl)").unwrap();
//! assert_eq!(found.span, "(ghi]jkl)");
//! assert_eq!(found.start, 7);
//!
//! assert!(match_parenthetical("no brackets").is_none());
//! ```

use serde::Serialize;

/// A balanced bracket span found in a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ParentheticalMatch<'a> {
    /// The span, including both outer brackets
    pub span: &'a str,
    /// Byte offset of the opening bracket in the searched string
    pub start: usize,
}

impl<'a> ParentheticalMatch<'a> {
    /// Byte offset one past the closing bracket.
    pub fn end(&self) -> usize {
        self.start + self.span.len()
    }

    /// The text between the outer brackets.
    pub fn interior(&self) -> &'a str {
        // Both outer brackets are single-byte ASCII.
        &self.span[1..self.span.len() - 1]
    }
}

/// Opening bracket paired with a closing one.
fn opener_for(close: u8) -> Option<u8> {
    match close {
        b')' => Some(b'('),
        b']' => Some(b'['),
        b'}' => Some(b'{'),
        _ => None,
    }
}

fn is_opener(byte: u8) -> bool {
    matches!(byte, b'(' | b'[' | b'{')
}

/// Outcome of a single left-to-right scan.
enum Scan {
    /// A balanced span `[start, end)` relative to the scanned slice
    Balanced { start: usize, end: usize },
    /// Brackets were opened but never balanced; holds the first opener
    Unbalanced { first_open: usize },
    /// No opening bracket at all
    NoBracket,
}

fn scan(text: &str) -> Scan {
    let mut stack: Vec<u8> = Vec::new();
    let mut start = None;

    // Brackets are ASCII, so scanning bytes never splits a multi-byte char.
    for (i, &byte) in text.as_bytes().iter().enumerate() {
        if is_opener(byte) {
            if stack.is_empty() {
                start = Some(i);
            }
            stack.push(byte);
        } else if let Some(open) = opener_for(byte) {
            let Some(depth) = stack.iter().rposition(|&b| b == open) else {
                continue;
            };
            stack.truncate(depth);
            if stack.is_empty() {
                if let Some(start) = start {
                    return Scan::Balanced { start, end: i + 1 };
                }
            }
        }
    }

    match start {
        Some(first_open) => Scan::Unbalanced { first_open },
        None => Scan::NoBracket,
    }
}

/// Find the first balanced bracket span in `s`.
///
/// Returns `None` for `None`, for text without brackets, and for text whose
/// brackets never balance anywhere. When the outermost opener never closes,
/// the search restarts one past it, so `abc(def(ghi)jkl` still finds
/// `(ghi)` at 7.
pub fn match_parenthetical<'a>(s: impl Into<Option<&'a str>>) -> Option<ParentheticalMatch<'a>> {
    let s = s.into()?;
    let mut offset = 0;

    while offset < s.len() {
        match scan(&s[offset..]) {
            Scan::Balanced { start, end } => {
                return Some(ParentheticalMatch {
                    span: &s[offset + start..offset + end],
                    start: offset + start,
                });
            }
            Scan::Unbalanced { first_open } => offset += first_open + 1,
            Scan::NoBracket => return None,
        }
    }

    None
}
