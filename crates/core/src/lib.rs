//! Argscan Core Library
//!
//! This crate provides a small command-line flag parser. An [`parser::ArgParser`]
//! owns a list of argument tokens and looks flags up by their short (`-x`) and
//! long (`--xxx`) spellings, reading the following token as the value.
//!
//! # Key Features
//!
//! - **Typed Lookups**: String, boolean and integer accessors, plus a generic strict form
//! - **Upfront Declaration**: Recognized flags are declared in a [`flags::FlagTable`]
//!   before any lookup, so validation never depends on call order
//! - **Validation**: Rejects the first unrecognized flag, with a spelling suggestion
//! - **Flag Tables on Disk**: Load declarations from a YAML file
//!
//! # Examples
//!
//! ```
//! use argscan_core::parser::ArgParser;
//!
//! let parser = ArgParser::new(["-p", "8080", "--verbose"]);
//! assert_eq!(parser.integer("p", "port"), Some(8080));
//! assert!(parser.flag("v", "verbose"));
//! assert!(!parser.help());
//! ```

pub mod config;
pub mod error;
pub mod file_handling;
pub mod flags;
pub mod parser;
