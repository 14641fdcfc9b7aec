//! Token tree types for phrase analysis.
//!
//! A phrase is parsed into a tree of [`Token`]s before the merge pass flattens
//! it into index strings. Leaves carry a [`LeafKind`] and a value; branches
//! carry a [`BranchKind`] and their ordered children.
//!
//! ```text
//! Input: "unit 4b & p.o. box (north wing)"
//!
//! Tree:
//!   SubPhrase
//!     Literal "unit"
//!     Literal "4b"
//!   SubPhrase
//!     Literal "po"
//!     Literal "box"
//!   Parenthetical
//!     Literal "north"
//!     Literal "wing"
//! ```
//!
//! # Examples
//!
//! ```
//! use shortword::analysis::token::{BranchKind, LeafKind, Token};
//!
//! let tree = Token::branch(
//!     BranchKind::Parenthetical,
//!     vec![Token::literal("north"), Token::literal("wing")],
//! );
//! assert_eq!(tree.children().len(), 2);
//! assert_eq!(tree.children()[0].kind_name(), "literal");
//!
//! let date = Token::leaf(LeafKind::Date, "1/2/2020");
//! assert_eq!(date.value(), Some("1/2/2020"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of leaf tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafKind {
    /// Unparsed text; only exists before word splitting
    Raw,
    /// A plain word or collapsed abbreviation
    Literal,
    /// A `d/m/yy` style date
    Date,
    /// A dollar amount
    Dollars,
    /// An `NxN` dimension pair
    Dimensions,
    /// A decimal number or a number with a unit suffix
    Number,
}

impl LeafKind {
    /// Whether leaves of this kind take part in short-word merging.
    ///
    /// Every parsed kind does; only [`LeafKind::Raw`] does not.
    pub fn is_literal(self) -> bool {
        !matches!(self, LeafKind::Raw)
    }

    /// Get a stable lowercase name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            LeafKind::Raw => "raw",
            LeafKind::Literal => "literal",
            LeafKind::Date => "date",
            LeafKind::Dollars => "dollars",
            LeafKind::Dimensions => "dimensions",
            LeafKind::Number => "number",
        }
    }
}

/// Classification of branch tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchKind {
    /// Text grouped by a balanced bracket pair
    Parenthetical,
    /// One side of a strong relational delimiter
    SubPhrase,
}

impl BranchKind {
    /// Get a stable lowercase name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            BranchKind::Parenthetical => "parenthetical",
            BranchKind::SubPhrase => "sub_phrase",
        }
    }
}

/// An atomic token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Leaf {
    /// The kind of this leaf
    pub kind: LeafKind,
    /// The text of this leaf
    pub value: String,
}

impl Leaf {
    /// Create a new leaf.
    pub fn new<S: Into<String>>(kind: LeafKind, value: S) -> Self {
        Leaf {
            kind,
            value: value.into(),
        }
    }

    /// Length of the value in characters.
    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Whether this leaf takes part in short-word merging.
    pub fn is_literal(&self) -> bool {
        self.kind.is_literal()
    }
}

/// A token with ordered children.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Branch {
    /// The kind of this branch
    pub kind: BranchKind,
    /// The children of this branch, in phrase order
    pub children: Vec<Token>,
}

impl Branch {
    /// Create a new branch.
    pub fn new(kind: BranchKind, children: Vec<Token>) -> Self {
        Branch { kind, children }
    }
}

/// A node in the parsed phrase tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Token {
    /// An atomic token
    Leaf(Leaf),
    /// A grouping of tokens
    Branch(Branch),
}

impl Token {
    /// Create a leaf token.
    pub fn leaf<S: Into<String>>(kind: LeafKind, value: S) -> Self {
        Token::Leaf(Leaf::new(kind, value))
    }

    /// Create a raw (unparsed) leaf token.
    pub fn raw<S: Into<String>>(value: S) -> Self {
        Token::leaf(LeafKind::Raw, value)
    }

    /// Create a literal leaf token.
    pub fn literal<S: Into<String>>(value: S) -> Self {
        Token::leaf(LeafKind::Literal, value)
    }

    /// Create a branch token.
    pub fn branch(kind: BranchKind, children: Vec<Token>) -> Self {
        Token::Branch(Branch::new(kind, children))
    }

    /// Get the value of a leaf, or `None` for branches.
    pub fn value(&self) -> Option<&str> {
        match self {
            Token::Leaf(leaf) => Some(&leaf.value),
            Token::Branch(_) => None,
        }
    }

    /// Get the children of a branch; leaves have none.
    pub fn children(&self) -> &[Token] {
        match self {
            Token::Leaf(_) => &[],
            Token::Branch(branch) => &branch.children,
        }
    }

    /// Check if this token is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Token::Leaf(_))
    }

    /// Get the name of this token's kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Leaf(leaf) => leaf.kind.name(),
            Token::Branch(branch) => branch.kind.name(),
        }
    }

    /// Count the leaves under this token.
    pub fn leaf_count(&self) -> usize {
        match self {
            Token::Leaf(_) => 1,
            Token::Branch(branch) => branch.children.iter().map(Token::leaf_count).sum(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Leaf(leaf) => write!(f, "{}", leaf.value),
            Token::Branch(branch) => {
                let (open, close) = match branch.kind {
                    BranchKind::Parenthetical => ("(", ")"),
                    BranchKind::SubPhrase => ("<", ">"),
                };
                write!(f, "{open}")?;
                for (i, child) in branch.children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{child}")?;
                }
                write!(f, "{close}")
            }
        }
    }
}
