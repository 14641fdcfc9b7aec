//! Command line argument parsing for the shortword CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::StopWordsConfig;

/// shortword - A tokenizer for short, noisy search phrases
#[derive(Parser, Debug, Clone)]
#[command(name = "shortword")]
#[command(about = "Tokenize short phrases (codes, references, addresses, names) for search indexing")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ShortwordArgs {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Analyzer configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "SHORTWORD_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ShortwordArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }

    /// Log level for the effective verbosity.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            0 => LevelFilter::Error, // Quiet mode
            1 => LevelFilter::Warn,  // Default
            2 => LevelFilter::Info,  // -v
            3 => LevelFilter::Debug, // -vv
            _ => LevelFilter::Trace, // -vvv
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Tokenize phrases, or every line of an input file
    Tokenize(TokenizeArgs),

    /// Find the first balanced bracket pair in a text
    Match(MatchArgs),

    /// Show how a text is grouped by its brackets
    Graph(GraphArgs),

    /// Show the parsed token tree of a phrase before merging
    Parse(ParseArgs),
}

/// Arguments for tokenizing
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Phrases to tokenize
    #[arg(value_name = "PHRASE")]
    pub phrases: Vec<String>,

    /// Read phrases from a file, one per line
    #[arg(short, long, value_name = "INPUT_FILE")]
    pub input: Option<PathBuf>,

    /// Stop words: "english", "none" or a path to a word list
    #[arg(short, long, value_name = "STOP_WORDS")]
    pub stop_words: Option<String>,
}

impl TokenizeArgs {
    /// The stop-word source requested on the command line, if any.
    pub fn stop_words_config(&self) -> Option<StopWordsConfig> {
        self.stop_words.as_deref().map(|value| match value {
            "english" => StopWordsConfig::English,
            "none" => StopWordsConfig::None,
            path => StopWordsConfig::File {
                path: PathBuf::from(path),
            },
        })
    }
}

/// Arguments for bracket matching
#[derive(Parser, Debug, Clone)]
pub struct MatchArgs {
    /// Text to scan
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for bracket grouping
#[derive(Parser, Debug, Clone)]
pub struct GraphArgs {
    /// Text to group
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Keep bracket groups that contain nothing
    #[arg(long)]
    pub keep_empty: bool,
}

/// Arguments for parsing
#[derive(Parser, Debug, Clone)]
pub struct ParseArgs {
    /// Phrase to parse
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
