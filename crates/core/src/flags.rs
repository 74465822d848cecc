//! Flag declarations.
//!
//! A [`FlagTable`] holds every flag a program recognizes. Flags are declared
//! upfront, before any lookup or validation happens, so the set of recognized
//! spellings never depends on which accessors have been called.

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Error::{DuplicateFlag, InvalidFlagName};
use crate::error::Result;

/// The kind of value a flag carries.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlagKind {
    /// Takes the following token as its value.
    String,
    /// Presence alone sets it; no value is consumed.
    Bool,
    /// Takes the following token, which must parse as an integer.
    Integer,
}

impl Display for FlagKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(match self {
            FlagKind::String => "string",
            FlagKind::Bool => "bool",
            FlagKind::Integer => "integer",
        })
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub kind: FlagKind,
    pub description: Option<String>,
}

impl Flag {
    pub fn new(short: &str, long: &str, kind: FlagKind) -> Self {
        Self {
            short: short.to_string(),
            long: long.to_string(),
            kind,
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// The `-x` spelling.
    pub fn short_form(&self) -> String {
        short_form(&self.short)
    }

    /// The `--xxx` spelling.
    pub fn long_form(&self) -> String {
        long_form(&self.long)
    }
}

impl Display for Flag {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}/{}", self.short_form(), self.long_form())
    }
}

pub(crate) fn short_form(short: &str) -> String {
    format!("-{short}")
}

pub(crate) fn long_form(long: &str) -> String {
    format!("--{long}")
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty()
        || name.starts_with('-')
        || name.contains('=')
        || name.chars().any(char::is_whitespace)
    {
        return Err(InvalidFlagName(name.to_string()));
    }

    Ok(())
}

/// Declared flags, keyed by spelling.
///
/// Each declared flag owns two spellings, `-short` and `--long`. Both point at
/// the same entry in `flags`, which keeps declaration order.
#[derive(Debug, Clone, Default)]
pub struct FlagTable {
    flags: Vec<Flag>,
    spellings: IndexMap<String, usize>,
}

impl FlagTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table that already declares `-h`/`--help`.
    pub fn with_help() -> Self {
        let mut table = Self::new();
        table.flags.push(Flag::new("h", "help", FlagKind::Bool).with_description("Print help"));
        table.spellings.insert(short_form("h"), 0);
        table.spellings.insert(long_form("help"), 0);
        table
    }

    /// Declares a flag, registering both of its spellings.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFlagName`] if either name is empty, starts with `-`,
    /// or contains whitespace or `=`, and [`DuplicateFlag`] if either spelling
    /// is already taken. The table is left unchanged on error.
    pub fn declare(&mut self, flag: Flag) -> Result<&mut Self> {
        validate_name(&flag.short)?;
        validate_name(&flag.long)?;

        let short = flag.short_form();
        let long = flag.long_form();
        for spelling in [&short, &long] {
            if self.spellings.contains_key(spelling) {
                return Err(DuplicateFlag(spelling.clone()));
            }
        }

        let index = self.flags.len();
        self.flags.push(flag);
        self.spellings.insert(short, index);
        self.spellings.insert(long, index);

        Ok(self)
    }

    /// Builds a table from a list of flags, declaring them in order.
    ///
    /// # Errors
    ///
    /// Fails on the first flag [`FlagTable::declare`] rejects.
    pub fn from_flags<I: IntoIterator<Item = Flag>>(flags: I) -> Result<Self> {
        let mut table = Self::new();
        for flag in flags {
            table.declare(flag)?;
        }
        Ok(table)
    }

    /// Whether `spelling` (e.g. `-v` or `--verbose`) belongs to a declared flag.
    pub fn contains(&self, spelling: &str) -> bool {
        self.spellings.contains_key(spelling)
    }

    /// Whether the exact `(short, long)` pair was declared together.
    pub fn is_declared(&self, short: &str, long: &str) -> bool {
        self.get(&short_form(short))
            .is_some_and(|flag| flag.long == long)
    }

    pub fn get(&self, spelling: &str) -> Option<&Flag> {
        self.spellings.get(spelling).map(|&index| &self.flags[index])
    }

    /// All registered spellings, in declaration order.
    pub fn spellings(&self) -> impl Iterator<Item = &str> {
        self.spellings.keys().map(String::as_str)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Flag> {
        self.flags.iter()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl<'a> IntoIterator for &'a FlagTable {
    type Item = &'a Flag;
    type IntoIter = std::slice::Iter<'a, Flag>;

    fn into_iter(self) -> Self::IntoIter {
        self.flags.iter()
    }
}
