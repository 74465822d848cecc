//! Argscan CLI Library
//!
//! This crate provides the `argscan` command, which checks an argument list
//! against a flag table and prints what each declared flag resolves to.
//!
//! # Architecture
//!
//! - [`cli_args`]: The tool's own command-line options, parsed with `clap`
//! - [`check`]: Loading the flag table, validating and resolving flags
//! - [`report`]: Rendering resolved flags for the terminal
//!
//! # Examples
//!
//! ```bash
//! # Check an argument list against the default table at ~/.argscan/flags.yml
//! argscan -- --name bob -p 8080
//!
//! # Use a custom table and fail on malformed integers
//! argscan -c ./flags.yml --strict -- -p eighty
//!
//! # Report values even when undeclared flags are present
//! argscan --allow-unknown -- --name bob --extra
//! ```

pub mod check;
pub mod cli_args;
pub mod report;
