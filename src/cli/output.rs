//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{OutputFormat, ShortwordArgs};
use crate::error::Result;

/// Results that know how to print themselves for a person.
pub trait HumanOutput {
    /// Lines to print in human format.
    fn human_lines(&self) -> Vec<String>;
}

/// Tokens produced for one phrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseTokens {
    pub phrase: String,
    pub tokens: Vec<String>,
}

/// Result structure for the tokenize command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenizeResults {
    pub results: Vec<PhraseTokens>,
    pub total_tokens: usize,
    pub duration_ms: u64,
}

impl HumanOutput for TokenizeResults {
    fn human_lines(&self) -> Vec<String> {
        self.results
            .iter()
            .map(|result| format!("{}\t{}", result.phrase, result.tokens.join(" | ")))
            .collect()
    }
}

/// Result structure for the match command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub text: String,
    pub span: Option<String>,
    pub start: Option<usize>,
}

impl HumanOutput for MatchResult {
    fn human_lines(&self) -> Vec<String> {
        match (&self.span, self.start) {
            (Some(span), Some(start)) => vec![format!("{span}\t{start}")],
            _ => vec!["no balanced brackets".to_string()],
        }
    }
}

/// Result structure for the graph and parse commands.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeResult {
    pub text: String,
    pub tokens: Vec<Token>,
}

impl HumanOutput for TreeResult {
    fn human_lines(&self) -> Vec<String> {
        self.tokens.iter().map(|token| render_tree(token, 0)).collect()
    }
}

/// Render a token with one line per node, indented by depth.
fn render_tree(token: &Token, depth: usize) -> String {
    let indent = "  ".repeat(depth);
    match token {
        Token::Leaf(leaf) => format!("{indent}{} {:?}", leaf.kind.name(), leaf.value),
        Token::Branch(branch) => {
            let mut lines = vec![format!("{indent}{}", branch.kind.name())];
            lines.extend(branch.children.iter().map(|child| render_tree(child, depth + 1)));
            lines.join("\n")
        }
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(message: &str, result: &T, args: &ShortwordArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &ShortwordArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    for line in result.human_lines() {
        println!("{line}");
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &ShortwordArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
