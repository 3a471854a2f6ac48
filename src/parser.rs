use std::ffi::OsString;

use pest::{Parser, iterators::Pair};
use pest_derive::Parser;
use tracing::trace;

use crate::ast::{Arguments, OptionValue, Token};
use crate::error::ParseError;

#[derive(Parser)]
#[grammar = "src/token.pest"]
struct TokenParser;

/// Classify a single non-empty token as an option marker or a value.
///
/// A bare `-` and a single-dash token longer than two characters are rejected.
pub fn classify(token: &str) -> Result<Token<'_>, ParseError> {
    let grammar_error = |message: String| ParseError::Grammar {
        token: token.to_owned(),
        message,
    };

    let mut pairs =
        TokenParser::parse(Rule::token, token).map_err(|e| grammar_error(e.to_string()))?;
    let pair = pairs
        .next()
        .ok_or_else(|| grammar_error("no token rule matched".to_string()))?;

    match pair.as_rule() {
        Rule::long_option => Ok(Token::Long(key_of(pair))),
        Rule::short_option => Ok(Token::Short(key_of(pair))),
        Rule::value => Ok(Token::Value(pair.as_str())),
        Rule::bare_dash => Err(ParseError::BareDash),
        Rule::malformed_short => Err(ParseError::InvalidShortOption {
            token: token.to_owned(),
        }),
        rule => Err(grammar_error(format!("unexpected rule {rule:?}"))),
    }
}

fn key_of<'a>(pair: Pair<'a, Rule>) -> &'a str {
    pair.into_inner().next().map(|p| p.as_str()).unwrap_or_default()
}

/// Split `tokens` into leading positionals and accumulated options.
///
/// Empty tokens are skipped. Once any option marker has been seen, every
/// following value belongs to the most recent key, never to the positionals.
/// When no token list is at hand, [`parse_env`] parses the process's own arguments.
pub fn parse<I, S>(tokens: I) -> Result<Arguments, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = Arguments::default();
    let mut current_key: Option<String> = None;

    for token in tokens {
        let token = token.as_ref();
        if token.is_empty() {
            continue;
        }

        let classified =
            classify(token).inspect_err(|err| trace!(token, %err, "rejected argument"))?;
        trace!(token, kind = ?classified, "classified argument");

        match classified {
            Token::Long(key) | Token::Short(key) => {
                // Redeclaring a key resets it but keeps its position
                args.options.insert(key.to_owned(), OptionValue::Presence);
                current_key = Some(key.to_owned());
            }
            Token::Value(value) => match &current_key {
                None => args.positionals.push(value.to_owned()),
                Some(key) => args.options.entry(key.clone()).or_default().push(value),
            },
        }
    }

    Ok(args)
}

/// Parse the process's own arguments, excluding the program name.
///
/// This is the fallback when no explicit token list is available. Arguments
/// that are not valid unicode are reported instead of panicking.
pub fn parse_env() -> Result<Arguments, ParseError> {
    parse_os(std::env::args_os())
}

/// Parse a raw argument vector whose first entry is the program name
fn parse_os<I>(args: I) -> Result<Arguments, ParseError>
where
    I: IntoIterator<Item = OsString>,
{
    let tokens = args
        .into_iter()
        .skip(1)
        .map(|arg| arg.into_string().map_err(|arg| ParseError::NotUnicode { arg }))
        .collect::<Result<Vec<_>, _>>()?;
    parse(tokens)
}
