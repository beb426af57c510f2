use std::collections::HashMap;

/// The value kind declared for a flag in the option string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    /// No modifier: the flag marks presence, and may appear at most once.
    Flag,
    /// `+`: each occurrence increments a tally.
    Counter,
    /// `:`: consumes the next token verbatim.
    String,
    /// `#`: consumes the next token as an `i64`.
    Int,
    /// `.`: consumes the next token as an `f64`.
    Float,
}

impl OptionKind {
    pub(crate) fn from_modifier(modifier: char) -> Option<Self> {
        match modifier {
            '+' => Some(OptionKind::Counter),
            ':' => Some(OptionKind::String),
            '#' => Some(OptionKind::Int),
            '.' => Some(OptionKind::Float),
            _ => None,
        }
    }

    /// Whether this kind consumes the following token as its value.
    pub fn takes_value(&self) -> bool {
        matches!(self, OptionKind::String | OptionKind::Int | OptionKind::Float)
    }
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The outcome for one flag that appeared on the command line.
///
/// Fields that do not apply to the flag's [`OptionKind`] stay zero valued:
/// * `Flag`: all fields zero (presence is the information).
/// * `Counter`: `int` holds the number of occurrences.
/// * `String`: `value` holds the raw token.
/// * `Int`: `value` holds the raw token and `int` the parsed value.
/// * `Float`: `value` holds the raw token and `float` the parsed value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedOption {
    /// The raw value token, for value-consuming flags.
    pub value: String,
    /// The tally of a counter, or the parsed value of an `Int` flag.
    pub int: i64,
    /// The parsed value of a `Float` flag.
    pub float: f64,
}

/// The result of a successful parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parsed {
    pub(crate) options: HashMap<char, ParsedOption>,
    pub(crate) remaining: Vec<String>,
}

impl Parsed {
    /// Look up the option recorded for `flag`.
    /// Returns `None` when the flag never appeared.
    pub fn get(&self, flag: char) -> Option<&ParsedOption> {
        self.options.get(&flag)
    }

    /// Whether `flag` appeared at least once.
    pub fn contains(&self, flag: char) -> bool {
        self.options.contains_key(&flag)
    }

    /// The number of times a counter `flag` appeared, or `0` when absent.
    pub fn count(&self, flag: char) -> i64 {
        self.options.get(&flag).map(|o| o.int).unwrap_or_default()
    }

    /// All options that appeared, keyed by flag.
    pub fn options(&self) -> &HashMap<char, ParsedOption> {
        &self.options
    }

    /// The non-option tokens, in their original order.
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    /// Split into the options mapping and the remaining tokens.
    pub fn into_parts(self) -> (HashMap<char, ParsedOption>, Vec<String>) {
        (self.options, self.remaining)
    }
}
