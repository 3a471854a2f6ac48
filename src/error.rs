use std::ffi::OsString;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid '-' argument")]
    BareDash,
    #[error("invalid short argument: {token}")]
    InvalidShortOption { token: String },
    #[error("argument is not valid unicode: {arg:?}")]
    NotUnicode { arg: OsString },
    #[error("failed to classify argument {token:?}: {message}")]
    Grammar { token: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnParseError {
    #[error("invalid option value: {key}: {value} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: &'static str,
    },
    #[error("invalid positional argument: {value} ({reason})")]
    InvalidPositional { value: String, reason: &'static str },
}
