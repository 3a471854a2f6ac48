use tracing::trace;

use crate::ast::{OptionValue, Options};
use crate::error::UnParseError;

/// Marker token for `key`: `-k` for single-character keys, `--key` otherwise.
///
/// The key `-` takes the long form, since `--` parses back as the empty key.
pub fn option_marker(key: &str) -> String {
    if key.chars().count() == 1 && key != "-" {
        format!("-{key}")
    } else {
        format!("--{key}")
    }
}

/// Rebuild a flat token sequence from positionals and options.
///
/// Positionals come first, in order, followed by each key's marker and its
/// values. Parsing the output yields the same positionals and options.
pub fn unparse<S: AsRef<str>>(
    positionals: &[S],
    options: &Options,
) -> Result<Vec<String>, UnParseError> {
    let mut tokens = Vec::with_capacity(positionals.len() + options.len());
    for positional in positionals {
        let positional = positional.as_ref();
        if let Some(reason) = value_problem(positional) {
            return Err(rejected(UnParseError::InvalidPositional {
                value: positional.to_owned(),
                reason,
            }));
        }
        tokens.push(positional.to_owned());
    }

    for (key, value) in options {
        tokens.push(option_marker(key));

        match value {
            OptionValue::Presence => {}
            OptionValue::Multiple(values) if values.len() < 2 => {
                return Err(rejected(invalid_value(
                    key,
                    value,
                    "multiple values need at least two entries",
                )));
            }
            OptionValue::Single(_) | OptionValue::Multiple(_) => {
                for item in value.values() {
                    if let Some(reason) = value_problem(item) {
                        return Err(rejected(invalid_value(key, value, reason)));
                    }
                    tokens.push(item.clone());
                }
            }
        }
    }

    Ok(tokens)
}

/// Why `value` would not come back as a value token when parsed
fn value_problem(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some("empty values are dropped when parsed")
    } else if value.starts_with('-') {
        Some("value would parse as an option")
    } else {
        None
    }
}

fn invalid_value(key: &str, value: &OptionValue, reason: &'static str) -> UnParseError {
    UnParseError::InvalidValue {
        key: key.to_owned(),
        value: format!("{value:?}"),
        reason,
    }
}

fn rejected(err: UnParseError) -> UnParseError {
    trace!(%err, "rejected option map");
    err
}
