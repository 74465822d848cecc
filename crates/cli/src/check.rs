//! Checking an argument list against a flag table.

use log::{debug, info};

use argscan_core::error::Result;
use argscan_core::parser::{ArgParser, Resolved};
use argscan_core::{config, file_handling};

use crate::cli_args::{Args, ReportMode};

/// What a check produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// `-h`/`--help` was given and the table declares it.
    HelpRequested,
    /// Every declared flag with the value found for it.
    Report(Vec<Resolved>),
}

/// Loads the flag table named by `args` and checks `args.arguments` against it.
///
/// # Errors
///
/// Returns an error if:
/// - The flag table cannot be loaded
/// - An undeclared flag is present (unless `--allow-unknown` is given)
/// - An integer value does not parse (only with `--strict`)
pub fn run(args: &Args) -> Result<Outcome> {
    let flag_table_path = config::get_flag_table_path(args.config_path.as_deref());
    debug!("Flag table path: `{}`", flag_table_path);

    let table = file_handling::get_flag_table(&flag_table_path)?;
    let parser = ArgParser::with_flags(args.arguments.iter().cloned(), table);

    check(&parser, args.allow_unknown, args.report_mode())
}

/// Validates and resolves an already constructed parser.
///
/// # Errors
///
/// See [`run`].
pub fn check(parser: &ArgParser, allow_unknown: bool, mode: ReportMode) -> Result<Outcome> {
    if allow_unknown {
        info!("Unknown flags are allowed, skipping validation.");
    } else {
        parser.validate()?;
    }

    if parser.flags().is_declared("h", "help") && parser.help() {
        return Ok(Outcome::HelpRequested);
    }

    let resolved = match mode {
        ReportMode::Strict => parser.resolve()?,
        ReportMode::Lenient => parser.resolve_lenient(),
    };

    Ok(Outcome::Report(resolved))
}
