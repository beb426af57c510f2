use std::env;
use thiserror::Error;

use crate::compiler::*;
use crate::model::Parsed;
use crate::scanner::*;

/// Any failure of [`getopt`].
/// The message is that of the underlying compile or scan error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GetoptError {
    /// The option string is malformed.
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// The arguments do not fit the option string.
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Parse `args` against the option string `optstring`.
///
/// The option string is compiled first; a malformed option string fails before any argument is looked at.
/// Then the arguments are scanned left to right:
/// 1. `--` ends option scanning; every later token is a remaining argument.
/// 2. `-xyz` is a cluster of single character flags.
/// A value-consuming flag must end its cluster, and takes the next token as its value.
/// 3. Anything else (including a bare `-`) is a remaining argument.
///
/// ```
/// use shortopt::getopt;
///
/// let parsed = getopt(&["-vv", "-n", "3", "file"], "v+n#").unwrap();
/// assert_eq!(parsed.count('v'), 2);
/// assert_eq!(parsed.get('n').map(|o| o.int), Some(3));
/// assert_eq!(parsed.remaining(), &["file".to_string()]);
/// ```
pub fn getopt<S: AsRef<str>>(args: &[S], optstring: &str) -> Result<Parsed, GetoptError> {
    let spec = OptSpec::compile(optstring)?;
    Ok(scan(args, &spec)?)
}

/// Run [`getopt`] against the Cli [`env::args`], excluding the program name.
pub fn getopt_env(optstring: &str) -> Result<Parsed, GetoptError> {
    let args: Vec<String> = env::args().skip(1).collect();
    getopt(&args, optstring)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_error_first() {
        // The scan would fail too, but compilation comes first.
        assert_eq!(
            getopt(&["-z"], "aa"),
            Err(GetoptError::Spec(SpecError::DuplicateSpecifier('a')))
        );
    }

    #[test]
    fn scan_error() {
        assert_eq!(
            getopt(&["-z"], "a"),
            Err(GetoptError::Scan(ScanError::UnknownOption('z')))
        );
    }

    #[test]
    fn message_transparent() {
        assert_eq!(
            getopt::<&str>(&[], "a?").unwrap_err().to_string(),
            "invalid option specifier '?'"
        );
        assert_eq!(
            getopt(&["-aa"], "a").unwrap_err().to_string(),
            "duplicate option 'a'"
        );
    }
}
