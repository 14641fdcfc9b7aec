//! Command implementations for the shortword CLI.

use std::fs;
use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::analysis::analyzer::{Analyzer, AnalyzerConfig, ShortWordAnalyzer};
use crate::analysis::tokenizer::bracket::match_parenthetical;
use crate::analysis::tokenizer::parenthetical::graph_parentheticals;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, ShortwordError};

/// Execute a CLI command.
pub fn execute_command(args: ShortwordArgs) -> Result<()> {
    match &args.command {
        Command::Tokenize(tokenize_args) => tokenize_phrases(tokenize_args.clone(), &args),
        Command::Match(match_args) => match_text(match_args.clone(), &args),
        Command::Graph(graph_args) => graph_text(graph_args.clone(), &args),
        Command::Parse(parse_args) => parse_text(parse_args.clone(), &args),
    }
}

/// Load the analyzer configuration named on the command line, or the defaults.
pub fn load_config(cli_args: &ShortwordArgs) -> Result<AnalyzerConfig> {
    match &cli_args.config {
        Some(path) => {
            info!("Loading analyzer config from: {}", path.display());
            AnalyzerConfig::from_file(path)
        }
        None => Ok(AnalyzerConfig::default()),
    }
}

/// Tokenize phrases from the command line or an input file.
fn tokenize_phrases(args: TokenizeArgs, cli_args: &ShortwordArgs) -> Result<()> {
    let mut config = load_config(cli_args)?;
    if let Some(stop_words) = args.stop_words_config() {
        config.stop_words = stop_words;
    }
    let analyzer = ShortWordAnalyzer::from_config(&config)?;

    let mut phrases = args.phrases.clone();
    if let Some(input) = &args.input {
        info!("Reading phrases from: {}", input.display());
        let content = fs::read_to_string(input)?;
        phrases.extend(content.lines().map(str::to_string));
    }

    if phrases.is_empty() {
        return Err(ShortwordError::invalid_argument(
            "No phrases given. Pass phrases as arguments or use --input.",
        ));
    }

    let results = tokenize_all(&analyzer, phrases);
    output_result("Tokenized phrases", &results, cli_args)
}

/// Tokenize a batch of phrases in parallel, keeping input order.
pub fn tokenize_all(analyzer: &ShortWordAnalyzer, phrases: Vec<String>) -> TokenizeResults {
    let start_time = Instant::now();

    let results: Vec<PhraseTokens> = phrases
        .into_par_iter()
        .map(|phrase| {
            let tokens = analyzer.analyze(&phrase);
            PhraseTokens { phrase, tokens }
        })
        .collect();

    let total_tokens = results.iter().map(|result| result.tokens.len()).sum();
    let duration = start_time.elapsed();
    debug!(
        "Tokenized {} phrases into {} tokens in {:?}",
        results.len(),
        total_tokens,
        duration
    );

    TokenizeResults {
        results,
        total_tokens,
        duration_ms: duration.as_millis() as u64,
    }
}

/// Report the first balanced bracket pair.
fn match_text(args: MatchArgs, cli_args: &ShortwordArgs) -> Result<()> {
    let found = match_parenthetical(args.text.as_str());
    let result = MatchResult {
        span: found.map(|m| m.span.to_string()),
        start: found.map(|m| m.start),
        text: args.text.clone(),
    };

    output_result("Bracket match", &result, cli_args)
}

/// Show the bracket grouping of a text.
fn graph_text(args: GraphArgs, cli_args: &ShortwordArgs) -> Result<()> {
    let config = load_config(cli_args)?;
    let mut options = config.graph_options();
    if args.keep_empty {
        options.remove_empty_entries = false;
    }

    let result = TreeResult {
        tokens: graph_parentheticals(args.text.as_str(), options),
        text: args.text,
    };

    output_result("Parenthetical graph", &result, cli_args)
}

/// Show the parsed token tree of a phrase.
fn parse_text(args: ParseArgs, cli_args: &ShortwordArgs) -> Result<()> {
    let config = load_config(cli_args)?;
    let analyzer = ShortWordAnalyzer::from_config(&config)?;

    let result = TreeResult {
        tokens: analyzer.parse(&args.text),
        text: args.text,
    };

    output_result("Parse tree", &result, cli_args)
}
