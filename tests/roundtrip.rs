//! Property-based tests for parse/unparse
//!
//! These check that value-only inputs stay positional and that any option
//! map produced by parsing survives a trip through `unparse`.

use proptest::prelude::*;
use qarg::{OptionValue, parse, unparse};

fn value_token() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./:][a-zA-Z0-9_./:=-]{0,8}"
}

/// Positionals followed by `(key, values)` groups with unique keys
fn command_line() -> impl Strategy<Value = Vec<String>> {
    (
        prop::collection::vec(value_token(), 0..4),
        prop::collection::btree_map(
            prop_oneof![4 => "[a-z][a-z0-9-]{0,6}", 1 => Just("-".to_string())],
            prop::collection::vec(value_token(), 0..4),
            0..5,
        ),
    )
        .prop_map(|(positionals, options)| {
            let mut tokens = positionals;
            for (key, values) in options {
                tokens.push(qarg::option_marker(&key));
                tokens.extend(values);
            }
            tokens
        })
}

proptest! {
    #[test]
    fn value_tokens_are_all_positional(
        tokens in prop::collection::vec(prop_oneof![value_token(), Just(String::new())], 0..10)
    ) {
        let (positionals, options) = parse(&tokens).unwrap().into_parts();
        let expected: Vec<&String> = tokens.iter().filter(|t| !t.is_empty()).collect();

        prop_assert_eq!(positionals.iter().collect::<Vec<_>>(), expected);
        prop_assert!(options.is_empty());
    }

    #[test]
    fn parse_unparse_roundtrip(tokens in command_line()) {
        let args = parse(&tokens).unwrap();
        let rebuilt = unparse(&args.positionals, &args.options).unwrap();

        prop_assert_eq!(&rebuilt, &tokens);
        prop_assert_eq!(parse(&rebuilt).unwrap(), args);
    }

    #[test]
    fn shapes_match_value_counts(tokens in command_line()) {
        let args = parse(&tokens).unwrap();
        for value in args.options.values() {
            match value {
                OptionValue::Presence => {}
                OptionValue::Single(v) => prop_assert!(!v.is_empty()),
                OptionValue::Multiple(vs) => prop_assert!(vs.len() >= 2),
            }
        }
    }

    #[test]
    fn parse_never_panics(tokens in prop::collection::vec(".{0,4}", 0..8)) {
        let _ = parse(&tokens);
    }
}
