use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::model::OptionKind;

/// A malformed option string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// The same flag letter is declared twice.
    #[error("duplicate option specifiers for '{0}'")]
    DuplicateSpecifier(char),

    /// A type modifier does not follow an unbound flag letter.
    #[error("option type specifier without option")]
    TypeWithoutOption,

    /// A character that is neither a letter nor a type modifier.
    #[error("invalid option specifier '{0}'")]
    InvalidSpecifier(char),
}

/// A compiled option string: one [`OptionKind`] per declared flag.
///
/// Each flag is a single letter, optionally followed by one modifier:
/// ```console
/// Modifier | Kind    | Occurrence
/// ---------------------------------------------------------
///          | Flag    | at most once
/// +        | Counter | any number of times, tallied
/// :        | String  | consumes the next token
/// #        | Int     | consumes the next token as an i64
/// .        | Float   | consumes the next token as an f64
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptSpec {
    // In declaration order.
    flags: Vec<(char, OptionKind)>,
}

impl OptSpec {
    /// Compile an option string, such as `"vn#o:"`.
    pub fn compile(spec: &str) -> Result<Self, SpecError> {
        let mut flags: Vec<(char, OptionKind)> = Vec::default();
        // Index of the most recent flag that has not yet received a modifier.
        let mut unbound: Option<usize> = None;

        for c in spec.chars() {
            if c.is_alphabetic() {
                if flags.iter().any(|(flag, _)| *flag == c) {
                    return Err(SpecError::DuplicateSpecifier(c));
                }

                unbound = Some(flags.len());
                flags.push((c, OptionKind::Flag));
            } else if let Some(kind) = OptionKind::from_modifier(c) {
                let index = unbound.take().ok_or(SpecError::TypeWithoutOption)?;
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Flag '{}' declared as {kind}.", flags[index].0);
                }
                flags[index].1 = kind;
            } else {
                return Err(SpecError::InvalidSpecifier(c));
            }
        }

        Ok(Self { flags })
    }

    /// The declared kind of `flag`, or `None` when the flag is not part of this spec.
    pub fn kind(&self, flag: char) -> Option<OptionKind> {
        self.flags
            .iter()
            .find(|(declared, _)| *declared == flag)
            .map(|(_, kind)| *kind)
    }

    /// Whether `flag` is declared in this spec.
    pub fn contains(&self, flag: char) -> bool {
        self.kind(flag).is_some()
    }

    /// The declared flags and their kinds, in declaration order.
    pub fn flags(&self) -> impl Iterator<Item = (char, OptionKind)> + '_ {
        self.flags.iter().copied()
    }

    /// The number of declared flags.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether no flags are declared.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl FromStr for OptSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OptSpec::compile(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{seq::SliceRandom, thread_rng, Rng};
    use rstest::rstest;

    const MODIFIERS: [&str; 5] = ["", "+", ":", "#", "."];

    #[test]
    fn compile_empty() {
        let spec = OptSpec::compile("").unwrap();
        assert!(spec.is_empty());
        assert_eq!(spec.len(), 0);
        assert_eq!(spec.kind('a'), None);
    }

    #[rstest]
    #[case("a", OptionKind::Flag)]
    #[case("a+", OptionKind::Counter)]
    #[case("a:", OptionKind::String)]
    #[case("a#", OptionKind::Int)]
    #[case("a.", OptionKind::Float)]
    fn compile_kind(#[case] spec: &str, #[case] expected: OptionKind) {
        let spec = OptSpec::compile(spec).unwrap();
        assert_eq!(spec.len(), 1);
        assert!(spec.contains('a'));
        assert_eq!(spec.kind('a'), Some(expected));
    }

    #[test]
    fn compile_mixed() {
        let spec: OptSpec = "vn#o:xq+f.".parse().unwrap();

        assert_eq!(
            spec.flags().collect::<Vec<_>>(),
            vec![
                ('v', OptionKind::Flag),
                ('n', OptionKind::Int),
                ('o', OptionKind::String),
                ('x', OptionKind::Flag),
                ('q', OptionKind::Counter),
                ('f', OptionKind::Float),
            ]
        );
        assert!(!spec.contains('z'));
    }

    #[test]
    fn flags_agree_with_kind() {
        let spec = OptSpec::compile("ab+c:d#e.").unwrap();

        for (flag, kind) in spec.flags() {
            assert!(spec.contains(flag));
            assert_eq!(spec.kind(flag), Some(kind));
        }
        assert_eq!(spec.flags().count(), spec.len());
    }

    #[rstest]
    #[case("aa", SpecError::DuplicateSpecifier('a'))]
    #[case("a+a", SpecError::DuplicateSpecifier('a'))]
    #[case("ab#ca", SpecError::DuplicateSpecifier('a'))]
    #[case("#", SpecError::TypeWithoutOption)]
    #[case("a:#", SpecError::TypeWithoutOption)]
    #[case("a++", SpecError::TypeWithoutOption)]
    #[case("+a", SpecError::TypeWithoutOption)]
    #[case("a?", SpecError::InvalidSpecifier('?'))]
    #[case("a-", SpecError::InvalidSpecifier('-'))]
    #[case("a b", SpecError::InvalidSpecifier(' '))]
    #[case("a1", SpecError::InvalidSpecifier('1'))]
    fn compile_invalid(#[case] spec: &str, #[case] expected: SpecError) {
        assert_eq!(OptSpec::compile(spec), Err(expected));
    }

    #[rstest]
    #[case(SpecError::DuplicateSpecifier('a'), "duplicate option specifiers for 'a'")]
    #[case(SpecError::TypeWithoutOption, "option type specifier without option")]
    #[case(SpecError::InvalidSpecifier('?'), "invalid option specifier '?'")]
    fn error_message(#[case] error: SpecError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn compile_random_valid() {
        let mut rng = thread_rng();
        let mut letters: Vec<char> = ('a'..='z').chain('A'..='Z').collect();

        for _ in 0..100 {
            letters.shuffle(&mut rng);
            let count = rng.gen_range(0..letters.len());
            let mut spec = String::default();
            let mut expected = Vec::default();

            for letter in &letters[..count] {
                let modifier = MODIFIERS[rng.gen_range(0..MODIFIERS.len())];
                spec.push(*letter);
                spec.push_str(modifier);
                let kind = modifier
                    .chars()
                    .next()
                    .and_then(OptionKind::from_modifier)
                    .unwrap_or(OptionKind::Flag);
                expected.push((*letter, kind));
            }

            let compiled = OptSpec::compile(&spec).unwrap();
            assert_eq!(compiled.flags().collect::<Vec<_>>(), expected, "spec: {spec}");
        }
    }
}
