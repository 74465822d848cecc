//! Command-line arguments of the `argscan` tool itself.
//!
//! The tool's own options are parsed with `clap`. The argument list under
//! test follows `--` and is handed untouched to the flag parser.

use clap::Parser;

/// How integer values that fail to parse are reported.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ReportMode {
    /// A malformed value is reported as absent
    Lenient,
    /// A malformed value is an error
    Strict,
}

/// Command-line arguments for the argscan CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use argscan_cli::cli_args::Args;
///
/// let args = Args::parse_from(["argscan", "--", "--name", "bob"]);
/// assert_eq!(args.arguments, vec!["--name", "bob"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "argscan", term_width = 0)]
pub struct Args {
    /// Path to the flag table YAML.
    ///
    /// If not provided, defaults to `~/.argscan/flags.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Fail when an integer flag is given a value that does not parse,
    /// instead of reporting the flag as absent.
    #[arg(long, short = 's', action)]
    pub strict: bool,

    /// Skip rejecting flags that the table does not declare.
    #[arg(long, short = 'a', action)]
    pub allow_unknown: bool,

    /// The argument list to check, given after `--`.
    ///
    /// # Examples
    /// ```bash
    /// argscan -c flags.yml -- --name bob -p 8080
    /// ```
    #[arg(last = true)]
    pub arguments: Vec<String>,
}

impl Args {
    pub fn report_mode(&self) -> ReportMode {
        if self.strict {
            ReportMode::Strict
        } else {
            ReportMode::Lenient
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["argscan"]);

        assert!(args.config_path.is_none());
        assert!(!args.strict);
        assert!(!args.allow_unknown);
        assert!(args.arguments.is_empty());
        assert_eq!(args.report_mode(), ReportMode::Lenient);
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from(["argscan", "-c", "/custom/flags.yml", "-s", "-a"]);

        assert_eq!(args.config_path, Some("/custom/flags.yml".to_string()));
        assert!(args.strict);
        assert!(args.allow_unknown);
        assert_eq!(args.report_mode(), ReportMode::Strict);
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "argscan",
            "--config-path",
            "/custom/flags.yml",
            "--strict",
            "--allow-unknown",
        ]);

        assert_eq!(args.config_path, Some("/custom/flags.yml".to_string()));
        assert!(args.strict);
        assert!(args.allow_unknown);
    }

    #[test]
    fn test_args_after_separator_are_not_interpreted() {
        let args = Args::parse_from(["argscan", "-s", "--", "--strict", "-c", "x", "--help"]);

        assert!(args.strict);
        assert!(args.config_path.is_none());
        assert_eq!(args.arguments, vec!["--strict", "-c", "x", "--help"]);
    }

    #[test]
    fn test_args_positional_without_separator_rejected() {
        let result = Args::try_parse_from(["argscan", "--name"]);
        assert!(result.is_err());
    }
}
