//! Extraction of composite "special" tokens.
//!
//! Before text is split on punctuation, values whose punctuation is part of
//! their meaning are pulled out whole: abbreviations, dates, dollar amounts,
//! dimension pairs, numbers with a unit suffix and decimal numbers.
//!
//! Patterns are tried in a fixed priority order. Only the leftmost match of
//! the first pattern that matches at all is taken per step. The text before
//! it cannot contain that pattern (or any pattern tried before it), so it is
//! searched with those excluded; the text after it is searched with the full
//! set again.
//!
//! # Examples
//!
//! ```
//! use shortword::analysis::tokenizer::special::{Segment, SpecialTokenExtractor};
//!
//! let extractor = SpecialTokenExtractor::new();
//! let segments = extractor.segments("paid $1,250.00 on 3/4/21");
//!
//! let values: Vec<_> = segments
//!     .iter()
//!     .map(|s| match s {
//!         Segment::Special(token) => token.value().unwrap_or_default(),
//!         Segment::Text(text) => text.trim(),
//!     })
//!     .collect();
//! assert_eq!(values, vec!["paid", "$1250.00", "on", "3/4/21"]);
//! ```

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::analysis::token::{LeafKind, Token};

/// Two or more single letters joined by dots: `u.s.a.`, `p.o`.
static ABBREVIATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\p{L}(?:\.\p{L})+\b\.?").expect("valid abbreviation regex"));

static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{1,2}/\d{1,2}/(?:\d{4}|\d{2})\b").expect("valid date regex")
});

static DOLLARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d{2}\b)?").expect("valid dollars regex")
});

static DIMENSIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+\s*x\s*\d+\b").expect("valid dimensions regex"));

static UNIT_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)? ?(?P<unit>\p{L}{1,2})")
        .expect("valid unit number regex")
});

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:\d{1,3}(?:,\d{3})+|\d+)\.\d+\b").expect("valid decimal regex")
});

/// Single-letter compass points that never count as a unit suffix.
const COMPASS_POINTS: [&str; 4] = ["n", "s", "e", "w"];

/// A special token found in a piece of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecialMatch {
    /// Byte offset where the match starts
    pub start: usize,
    /// Byte offset one past the end of the match
    pub end: usize,
    /// The extracted token
    pub token: Token,
}

/// A pattern that can locate one kind of special token.
pub trait SpecialPattern: Send + Sync {
    /// Find the leftmost acceptable occurrence in `text`.
    fn find(&self, text: &str) -> Option<SpecialMatch>;

    /// Get the name of this pattern (for debugging and logging).
    fn name(&self) -> &'static str;
}

type Normalizer = fn(&str) -> String;
type Acceptor = fn(&Captures<'_>, &str) -> bool;

/// A special-token pattern backed by a regular expression.
///
/// Candidates are visited left to right; `accept` sees the captures and the
/// text following the candidate and can reject it, in which case the search
/// resumes one character past the candidate's start.
pub struct RegexPattern {
    name: &'static str,
    kind: LeafKind,
    regex: &'static LazyLock<Regex>,
    normalize: Normalizer,
    accept: Acceptor,
}

impl RegexPattern {
    fn new(
        name: &'static str,
        kind: LeafKind,
        regex: &'static LazyLock<Regex>,
        normalize: Normalizer,
    ) -> Self {
        RegexPattern {
            name,
            kind,
            regex,
            normalize,
            accept: |_, _| true,
        }
    }

    fn with_acceptor(mut self, accept: Acceptor) -> Self {
        self.accept = accept;
        self
    }

    /// Abbreviations, collapsed by removing the dots.
    pub fn abbreviation() -> Self {
        Self::new("abbreviation", LeafKind::Literal, &ABBREVIATION, |m| {
            m.replace('.', "")
        })
    }

    /// Dates such as `1/2/2020` or `12/31/99`.
    pub fn date() -> Self {
        Self::new("date", LeafKind::Date, &DATE, str::to_string)
    }

    /// Dollar amounts with optional grouping and cents.
    pub fn dollars() -> Self {
        Self::new("dollars", LeafKind::Dollars, &DOLLARS, strip_grouping)
    }

    /// Dimension pairs such as `10 x 12`, collapsed to `10x12`.
    pub fn dimensions() -> Self {
        Self::new("dimensions", LeafKind::Dimensions, &DIMENSIONS, strip_whitespace)
    }

    /// Numbers followed by a one or two letter unit and whitespace.
    pub fn unit_number() -> Self {
        Self::new("unit_number", LeafKind::Number, &UNIT_NUMBER, |m| {
            strip_whitespace(&strip_grouping(m))
        })
        .with_acceptor(|caps, after| {
            let unit_ok = caps
                .name("unit")
                .is_some_and(|unit| !COMPASS_POINTS.contains(&unit.as_str()));
            unit_ok && after.starts_with(char::is_whitespace)
        })
    }

    /// Decimal numbers with optional grouping.
    pub fn decimal() -> Self {
        Self::new("decimal", LeafKind::Number, &DECIMAL, strip_grouping)
    }
}

impl SpecialPattern for RegexPattern {
    fn find(&self, text: &str) -> Option<SpecialMatch> {
        let mut from = 0;
        while from <= text.len() {
            let caps = self.regex.captures_at(text, from)?;
            let whole = caps.get(0)?;
            if (self.accept)(&caps, &text[whole.end()..]) {
                return Some(SpecialMatch {
                    start: whole.start(),
                    end: whole.end(),
                    token: Token::leaf(self.kind, (self.normalize)(whole.as_str())),
                });
            }
            from = whole.start() + text[whole.start()..].chars().next()?.len_utf8();
        }
        None
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

fn strip_grouping(value: &str) -> String {
    value.replace(',', "")
}

fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// A piece of text after special-token extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// An extracted special token
    Special(Token),
    /// Plain text left for word splitting
    Text(&'a str),
}

/// Splits text around special tokens using a priority-ordered pattern list.
pub struct SpecialTokenExtractor {
    patterns: Vec<Box<dyn SpecialPattern>>,
}

impl SpecialTokenExtractor {
    /// Create an extractor with the default patterns in priority order.
    pub fn new() -> Self {
        Self::with_patterns(vec![
            Box::new(RegexPattern::abbreviation()),
            Box::new(RegexPattern::date()),
            Box::new(RegexPattern::dollars()),
            Box::new(RegexPattern::dimensions()),
            Box::new(RegexPattern::unit_number()),
            Box::new(RegexPattern::decimal()),
        ])
    }

    /// Create an extractor with custom patterns, highest priority first.
    pub fn with_patterns(patterns: Vec<Box<dyn SpecialPattern>>) -> Self {
        SpecialTokenExtractor { patterns }
    }

    /// Names of the patterns in priority order.
    pub fn pattern_names(&self) -> Vec<&'static str> {
        self.patterns.iter().map(|p| p.name()).collect()
    }

    /// Split `text` into special tokens and the plain text between them.
    ///
    /// Blank text segments are omitted.
    pub fn segments<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let mut out = Vec::new();
        self.collect(text, 0, &mut out);
        out
    }

    fn collect<'a>(&self, mut text: &'a str, mut first_pattern: usize, out: &mut Vec<Segment<'a>>) {
        loop {
            let found = self
                .patterns
                .iter()
                .enumerate()
                .skip(first_pattern)
                .find_map(|(index, pattern)| pattern.find(text).map(|m| (index, m)));

            let Some((index, found)) = found else {
                if !text.trim().is_empty() {
                    out.push(Segment::Text(text));
                }
                return;
            };

            self.collect(&text[..found.start], index + 1, out);
            out.push(Segment::Special(found.token));
            text = &text[found.end..];
            first_pattern = 0;
        }
    }
}

impl Default for SpecialTokenExtractor {
    fn default() -> Self {
        Self::new()
    }
}
