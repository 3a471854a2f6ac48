//! Minimal command-line argument parsing.
//!
//! [`parse`] splits a token list into the positionals that come before the
//! first option marker and a map of options to their values. [`unparse`]
//! rebuilds a token list that parses back to the same result.

mod ast;
mod error;
mod parser;
mod unparser;

pub use ast::{Arguments, OptionValue, Options, Token};
pub use error::{ParseError, UnParseError};
pub use parser::{classify, parse, parse_env};
pub use unparser::{option_marker, unparse};
