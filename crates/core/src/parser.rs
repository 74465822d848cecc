//! Flag lookup over an owned argument list.
//!
//! [`ArgParser`] owns the argument tokens (program name excluded) and answers
//! typed queries by scanning them for `-short` or `--long`. Matching is exact
//! string equality: no abbreviations, no clustered short flags and no
//! `--flag=value` syntax. When a flag appears more than once, the leftmost
//! occurrence wins.
//!
//! # Examples
//!
//! ```
//! use argscan_core::flags::{Flag, FlagKind, FlagTable};
//! use argscan_core::parser::ArgParser;
//!
//! let table = FlagTable::from_flags([
//!     Flag::new("n", "name", FlagKind::String),
//!     Flag::new("p", "port", FlagKind::Integer),
//! ])?;
//! let parser = ArgParser::with_flags(["--name", "bob", "-p", "8080"], table);
//!
//! parser.validate()?;
//! assert_eq!(parser.string("n", "name"), Some("bob".to_string()));
//! assert_eq!(parser.integer("p", "port"), Some(8080));
//! # Ok::<(), argscan_core::error::Error>(())
//! ```

use std::fmt::Display;
use std::str::FromStr;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use log::debug;

use crate::error::{Error, Result};
use crate::flags::{long_form, short_form, Flag, FlagKind, FlagTable};

/// A resolved flag value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Str(String),
    Bool(bool),
    Integer(i64),
}

impl Display for FlagValue {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagValue::Str(value) => formatter.write_str(value),
            FlagValue::Bool(value) => write!(formatter, "{value}"),
            FlagValue::Integer(value) => write!(formatter, "{value}"),
        }
    }
}

/// A declared flag together with the value found for it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub flag: Flag,
    pub value: Option<FlagValue>,
}

#[derive(Debug, Clone)]
pub struct ArgParser {
    args: Vec<String>,
    flags: FlagTable,
    validating: bool,
}

impl ArgParser {
    /// Creates a parser without declared flags. [`ArgParser::validate`] on such
    /// a parser rejects every `-`-prefixed token.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            flags: FlagTable::new(),
            validating: false,
        }
    }

    /// Creates a parser that recognizes the flags declared in `flags`.
    pub fn with_flags<I, S>(args: I, flags: FlagTable) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            flags,
            validating: true,
        }
    }

    /// Captures the process arguments, skipping the program name.
    pub fn from_env() -> Self {
        Self::new(std::env::args().skip(1))
    }

    pub fn from_env_with_flags(flags: FlagTable) -> Self {
        Self::with_flags(std::env::args().skip(1), flags)
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn flags(&self) -> &FlagTable {
        &self.flags
    }

    fn matches_flag(&self, index: usize, short: &str, long: &str) -> bool {
        let Some(arg) = self.args.get(index) else {
            return false;
        };

        arg.strip_prefix('-') == Some(short) || arg.strip_prefix("--") == Some(long)
    }

    /// Index of the first token matching the flag.
    fn position(&self, short: &str, long: &str) -> Option<usize> {
        if self.validating && !self.flags.is_declared(short, long) {
            debug!(
                "Looking up undeclared flag {}/{}",
                short_form(short),
                long_form(long)
            );
        }

        (0..self.args.len()).find(|&index| self.matches_flag(index, short, long))
    }

    /// The token following the first match, if there is one.
    fn raw_value(&self, short: &str, long: &str) -> Option<&str> {
        let index = self.position(short, long)?;
        let value = self.args.get(index + 1).map(String::as_str);

        if value.is_none() {
            debug!("Flag `{}` given without a value", self.args[index]);
        }

        value
    }

    /// Returns the value following the first `-short` or `--long`.
    ///
    /// `None` if the flag is absent or is the last token.
    pub fn string(&self, short: &str, long: &str) -> Option<String> {
        self.raw_value(short, long).map(ToString::to_string)
    }

    /// Returns whether `-short` or `--long` appears anywhere.
    pub fn flag(&self, short: &str, long: &str) -> bool {
        self.position(short, long).is_some()
    }

    /// Returns the integer following the first `-short` or `--long`.
    ///
    /// A value that does not parse is treated the same as a missing one. Use
    /// [`ArgParser::value`] to tell the two apart.
    pub fn integer(&self, short: &str, long: &str) -> Option<i64> {
        self.value(short, long).ok().flatten()
    }

    /// Parses the value following the first `-short` or `--long`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedValue`] if the value is present but does not
    /// parse as `T`.
    pub fn value<T>(&self, short: &str, long: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        let Some(raw) = self.raw_value(short, long) else {
            return Ok(None);
        };

        raw.parse::<T>().map(Some).map_err(|e| {
            Error::malformed_value(
                format!("{}/{}", short_form(short), long_form(long)),
                raw.to_string(),
                e.to_string(),
            )
        })
    }

    /// Whether `-h` or `--help` was given.
    pub fn help(&self) -> bool {
        self.flag("h", "help")
    }

    /// Checks that every `-`-prefixed token is a declared spelling.
    ///
    /// Stops at the first unknown token. Tokens are not classified as flags
    /// or values, so a value such as `-5` must itself be a declared spelling.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownArgument`] naming the first unrecognized token.
    pub fn validate(&self) -> Result<()> {
        for arg in &self.args {
            if !arg.starts_with('-') {
                continue;
            }

            if !self.flags.contains(arg) {
                let suggestion = self.suggest(arg);
                debug!("Unknown argument `{arg}`, suggestion: {suggestion:?}");
                return Err(Error::unknown_argument(arg.clone(), suggestion));
            }
        }

        Ok(())
    }

    /// Closest declared spelling to `arg`, if any matches at all.
    fn suggest(&self, arg: &str) -> Option<String> {
        let matcher = SkimMatcherV2::default();
        let name = arg.trim_start_matches('-');
        if name.is_empty() {
            return None;
        }

        self.flags
            .spellings()
            .filter_map(|spelling| {
                let candidate = spelling.trim_start_matches('-');
                matcher
                    .fuzzy_match(candidate, name)
                    .map(|score| (score, spelling))
            })
            .max_by_key(|(score, _)| *score)
            .map(|(_, spelling)| spelling.to_string())
    }

    /// Looks up every declared flag according to its kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedValue`] if an integer flag has a value that
    /// does not parse.
    pub fn resolve(&self) -> Result<Vec<Resolved>> {
        self.flags
            .iter()
            .map(|flag| -> Result<Resolved> {
                let value = match flag.kind {
                    FlagKind::String => self.string(&flag.short, &flag.long).map(FlagValue::Str),
                    FlagKind::Bool => Some(FlagValue::Bool(self.flag(&flag.short, &flag.long))),
                    FlagKind::Integer => self
                        .value::<i64>(&flag.short, &flag.long)?
                        .map(FlagValue::Integer),
                };

                Ok(Resolved {
                    flag: flag.clone(),
                    value,
                })
            })
            .collect()
    }

    /// Like [`ArgParser::resolve`], but a malformed integer resolves to `None`.
    pub fn resolve_lenient(&self) -> Vec<Resolved> {
        self.flags
            .iter()
            .map(|flag| {
                let value = match flag.kind {
                    FlagKind::String => self.string(&flag.short, &flag.long).map(FlagValue::Str),
                    FlagKind::Bool => Some(FlagValue::Bool(self.flag(&flag.short, &flag.long))),
                    FlagKind::Integer => {
                        self.integer(&flag.short, &flag.long).map(FlagValue::Integer)
                    }
                };

                Resolved {
                    flag: flag.clone(),
                    value,
                }
            })
            .collect()
    }
}
