use proptest::prelude::*;

use shortword::analysis::token_filter::StopFilter;
use shortword::{match_parenthetical, tokenize};

/// Phrases built from the characters the parser cares about.
fn phrase_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ()\\[\\]{}&+,.$/:;<>=_-]{0,48}"
}

/// Bracket-free text.
fn plain_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9 .,&-]{0,16}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn tokenize_never_panics(phrase in any::<String>()) {
        let _ = tokenize(phrase.as_str(), None);
        let _ = tokenize(phrase.as_str(), Some(&StopFilter::new()));
    }

    #[test]
    fn tokenize_is_deterministic(phrase in phrase_strategy()) {
        prop_assert_eq!(tokenize(phrase.as_str(), None), tokenize(phrase.as_str(), None));
    }

    #[test]
    fn tokens_are_lowercase_and_non_empty(phrase in phrase_strategy()) {
        for token in tokenize(phrase.as_str(), None) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(char::is_uppercase), "token {:?}", token);
        }
    }

    #[test]
    fn no_token_prefixes_another(phrase in phrase_strategy()) {
        let tokens = tokenize(phrase.as_str(), Some(&StopFilter::new()));
        for (i, token) in tokens.iter().enumerate() {
            for (j, other) in tokens.iter().enumerate() {
                if i != j {
                    prop_assert!(!other.starts_with(token.as_str()), "{:?} prefixes {:?}", token, other);
                }
            }
        }
    }

    #[test]
    fn single_bracket_pair_round_trips(
        before in plain_strategy(),
        inner in plain_strategy(),
        after in plain_strategy(),
        kind in 0usize..3,
    ) {
        let (open, close) = [('(', ')'), ('[', ']'), ('{', '}')][kind];
        let text = format!("{before}{open}{inner}{close}{after}");

        let found = match_parenthetical(text.as_str());
        prop_assert!(found.is_some());
        let found = found.unwrap();
        prop_assert_eq!(found.start, before.len());
        prop_assert_eq!(found.span, format!("{open}{inner}{close}"));
        prop_assert_eq!(found.interior(), inner.as_str());
    }

    #[test]
    fn text_without_brackets_never_matches(text in plain_strategy()) {
        prop_assert!(match_parenthetical(text.as_str()).is_none());
    }
}
