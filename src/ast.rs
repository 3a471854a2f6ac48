use indexmap::IndexMap;

/// Option key to accumulated value, in the order keys were first declared
pub type Options = IndexMap<String, OptionValue>;

/// Classification of a single raw token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `--key`; the key may be empty for a lone `--`
    Long(&'a str),
    /// `-k`
    Short(&'a str),
    /// Anything that doesn't start with a dash
    Value(&'a str),
}

impl<'a> Token<'a> {
    /// Key introduced by this token, if it is an option marker
    pub fn key(&self) -> Option<&'a str> {
        match *self {
            Token::Long(key) | Token::Short(key) => Some(key),
            Token::Value(_) => None,
        }
    }
}

/// Value accumulated for one option key
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OptionValue {
    /// The flag was given with no value
    #[default]
    Presence,
    Single(String),
    /// Two or more values, in the order they appeared
    Multiple(Vec<String>),
}

impl OptionValue {
    /// Merge one more value token into this option.
    ///
    /// Widens `Presence` to `Single`, and `Single` to a two-element `Multiple`.
    /// A `Multiple` just grows, so repeated values never nest.
    pub fn push(&mut self, value: impl Into<String>) {
        let value = value.into();
        match self {
            OptionValue::Presence => *self = OptionValue::Single(value),
            OptionValue::Single(old) => {
                let old = std::mem::take(old);
                *self = OptionValue::Multiple(vec![old, value]);
            }
            OptionValue::Multiple(values) => values.push(value),
        }
    }

    pub fn is_presence(&self) -> bool {
        matches!(self, OptionValue::Presence)
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            OptionValue::Single(value) => Some(value),
            _ => None,
        }
    }

    /// Every value held, empty for a bare flag
    pub fn values(&self) -> &[String] {
        match self {
            OptionValue::Presence => &[],
            OptionValue::Single(value) => std::slice::from_ref(value),
            OptionValue::Multiple(values) => values,
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Single(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Single(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(values: Vec<String>) -> Self {
        OptionValue::Multiple(values)
    }
}

/// Result of parsing a token sequence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Arguments {
    /// Tokens seen before the first option marker
    pub positionals: Vec<String>,
    pub options: Options,
}

impl Arguments {
    pub fn into_parts(self) -> (Vec<String>, Options) {
        (self.positionals, self.options)
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    /// Rebuild a token sequence that parses back to `self`
    pub fn unparse(&self) -> Result<Vec<String>, crate::UnParseError> {
        crate::unparser::unparse(&self.positionals, &self.options)
    }
}
