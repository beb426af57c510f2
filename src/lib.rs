//! `shortopt` is a getopt style command line parser for Rust.
//!
//! The recognized options are described by a compact *option string*, where each option is a single letter optionally followed by a type modifier.
//! Parsing separates the recognized options (with their typed values) from the remaining positional arguments.
//!
//! # Usage
//! ```
//! use shortopt::getopt;
//!
//! let parsed = getopt(&["-qq", "-o", "out.txt", "-r", "0.5", "in.txt"], "q+o:r.").unwrap();
//! assert_eq!(parsed.count('q'), 2);
//! assert_eq!(parsed.get('o').map(|o| o.value.as_str()), Some("out.txt"));
//! assert_eq!(parsed.get('r').map(|o| o.float), Some(0.5));
//! assert_eq!(parsed.remaining(), &["in.txt".to_string()]);
//! ```
//!
//! # Option String
//! ```console
//! Modifier | Kind    | Syntax      | Recorded as
//! ---------------------------------------------------------------------
//!          | Flag    | -a          | presence only; repeating is an error
//! +        | Counter | -a [-a ...] | int = number of occurrences
//! :        | String  | -a VALUE    | value = VALUE
//! #        | Int     | -a VALUE    | value = VALUE, int = VALUE as i64
//! .        | Float   | -a VALUE    | value = VALUE, float = VALUE as f64
//! ```
//!
//! For example, `"vn#o:"` declares a flag `-v`, an integer option `-n` and a string option `-o`.
//! A malformed option string (repeated letter, modifier without a letter, unknown character) is rejected before any argument is looked at.
//!
//! # Cli Semantics
//! * Tokens are scanned left to right in a single pass.
//! * Multiple short options may be combined into a single cluster.
//! For example, `-vq` is equivalent to `-v -q`.
//! * A value-consuming option must be the final option of its cluster.
//! Its value is always the next token, even if that token starts with `-`.
//! For example, `-vn 3` is valid, but `-nv 3` is not.
//! * `--` ends option scanning: every later token is a remaining argument, verbatim.
//! * A bare `-` is a remaining argument.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events while compiling and scanning.
#![deny(missing_docs)]
mod compiler;
mod model;
mod parser;
mod scanner;

pub use compiler::{OptSpec, SpecError};
pub use model::*;
pub use parser::{getopt, getopt_env, GetoptError};
pub use scanner::{scan, ScanError, Scanner};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
