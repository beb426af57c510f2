use std::collections::HashMap;
use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::compiler::OptSpec;
use crate::model::*;

const TERMINATOR: &str = "--";

/// An argument list that does not fit the option string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A flag (other than a counter) appears more than once.
    #[error("duplicate option '{0}'")]
    DuplicateOption(char),

    /// A flag that is not declared in the option string.
    #[error("unknown option '{0}'")]
    UnknownOption(char),

    /// A value-consuming flag is the final token.
    #[error("option '{0}' requires an argument")]
    MissingArgument(char),

    /// A value-consuming flag is followed by more flags in its cluster.
    #[error("option '{0}' requires an argument and must end its group")]
    ArgumentNotLast(char),

    /// The value of an `Int` flag does not parse as an `i64`.
    #[error("invalid integer '{value}' for option '{flag}'")]
    InvalidInt {
        /// The flag being given the value.
        flag: char,
        /// The raw value token.
        value: String,
    },

    /// The value of a `Float` flag does not parse as an `f64`.
    #[error("invalid float '{value}' for option '{flag}'")]
    InvalidFloat {
        /// The flag being given the value.
        flag: char,
        /// The raw value token.
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    ScanningOptions,
    CollectingRemaining,
}

/// Incremental argument scanner over a compiled [`OptSpec`].
///
/// Tokens are `feed`ed one at a time, and `finish` produces the [`Parsed`] result.
/// Once the `--` terminator is fed, every later token is kept as a remaining argument.
#[derive(Debug)]
pub struct Scanner<'s> {
    spec: &'s OptSpec,
    state: ScanState,
    // A value-consuming flag still waiting for its token.
    pending: Option<(char, OptionKind)>,
    options: HashMap<char, ParsedOption>,
    remaining: Vec<String>,
}

impl<'s> Scanner<'s> {
    /// Start a scan against `spec`.
    pub fn new(spec: &'s OptSpec) -> Self {
        Self {
            spec,
            state: ScanState::ScanningOptions,
            pending: None,
            options: HashMap::default(),
            remaining: Vec::default(),
        }
    }

    /// Scan the next token.
    /// A value-consuming flag takes the token after it, whatever that token looks like.
    pub fn feed(&mut self, token: &str) -> Result<(), ScanError> {
        // The value of an option is taken verbatim, even when it looks like an option itself.
        if let Some((flag, kind)) = self.pending.take() {
            return self.capture(flag, kind, token);
        }

        match self.state {
            ScanState::CollectingRemaining => {
                self.remaining.push(token.to_string());
            }
            ScanState::ScanningOptions => {
                if token == TERMINATOR {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Terminator found, collecting the remaining tokens.");
                    }
                    self.state = ScanState::CollectingRemaining;
                } else if let Some(cluster) = token.strip_prefix('-').filter(|c| !c.is_empty()) {
                    self.match_cluster(cluster)?;
                } else {
                    self.remaining.push(token.to_string());
                }
            }
        }

        Ok(())
    }

    fn match_cluster(&mut self, cluster: &str) -> Result<(), ScanError> {
        let mut flags = cluster.chars().peekable();

        while let Some(flag) = flags.next() {
            let kind = self.spec.kind(flag).ok_or(ScanError::UnknownOption(flag))?;

            match kind {
                OptionKind::Flag => {
                    if self.options.insert(flag, ParsedOption::default()).is_some() {
                        return Err(ScanError::DuplicateOption(flag));
                    }
                }
                OptionKind::Counter => {
                    self.options.entry(flag).or_default().int += 1;
                }
                OptionKind::String | OptionKind::Int | OptionKind::Float => {
                    if flags.peek().is_some() {
                        return Err(ScanError::ArgumentNotLast(flag));
                    }

                    if self.options.contains_key(&flag) {
                        return Err(ScanError::DuplicateOption(flag));
                    }

                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Option '{flag}' awaits a {kind} value.");
                    }
                    self.pending = Some((flag, kind));
                }
            }
        }

        Ok(())
    }

    fn capture(&mut self, flag: char, kind: OptionKind, token: &str) -> Result<(), ScanError> {
        let mut option = ParsedOption {
            value: token.to_string(),
            ..ParsedOption::default()
        };

        match kind {
            OptionKind::String => {}
            OptionKind::Int => {
                option.int = token.parse().map_err(|_| ScanError::InvalidInt {
                    flag,
                    value: token.to_string(),
                })?;
            }
            OptionKind::Float => {
                option.float = token.parse().map_err(|_| ScanError::InvalidFloat {
                    flag,
                    value: token.to_string(),
                })?;
            }
            OptionKind::Flag | OptionKind::Counter => {
                unreachable!("internal error - only value-consuming options may be pending")
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Option '{flag}' captured '{token}'.");
        }
        self.options.insert(flag, option);
        Ok(())
    }

    /// Close the scan.
    /// Fails when the final option is still waiting for its value.
    pub fn finish(self) -> Result<Parsed, ScanError> {
        if let Some((flag, _)) = self.pending {
            return Err(ScanError::MissingArgument(flag));
        }

        Ok(Parsed {
            options: self.options,
            remaining: self.remaining,
        })
    }
}

/// Scan all `args` against `spec`.
pub fn scan<S: AsRef<str>>(args: &[S], spec: &OptSpec) -> Result<Parsed, ScanError> {
    let mut scanner = Scanner::new(spec);

    for token in args {
        scanner.feed(token.as_ref())?;
    }

    scanner.finish()
}
