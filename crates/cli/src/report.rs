//! Rendering resolved flags for the terminal.

use crossterm::style::Stylize;
use itertools::Itertools;

use argscan_core::parser::Resolved;

const ABSENT: &str = "(absent)";

fn spellings(resolved: &Resolved) -> String {
    format!(
        "{}, {}",
        resolved.flag.short_form(),
        resolved.flag.long_form()
    )
}

/// Renders one line per flag, e.g. `-n, --name <string>: bob`.
///
/// Present values are green and absent ones dark grey when `colored` is set.
pub fn render(resolved: &[Resolved], colored: bool) -> String {
    let width = resolved
        .iter()
        .map(|r| spellings(r).len())
        .max()
        .unwrap_or(0);

    resolved
        .iter()
        .map(|r| {
            let value = match (&r.value, colored) {
                (Some(value), true) => value.to_string().green().to_string(),
                (Some(value), false) => value.to_string(),
                (None, true) => ABSENT.dark_grey().to_string(),
                (None, false) => ABSENT.to_string(),
            };
            format!("{:<width$} <{}>: {}", spellings(r), r.flag.kind, value)
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use argscan_core::flags::{Flag, FlagKind};
    use argscan_core::parser::FlagValue;

    fn resolved(short: &str, long: &str, kind: FlagKind, value: Option<FlagValue>) -> Resolved {
        Resolved {
            flag: Flag::new(short, long, kind),
            value,
        }
    }

    #[test]
    fn test_render_plain() {
        let lines = render(
            &[
                resolved("n", "name", FlagKind::String, Some(FlagValue::Str("bob".to_string()))),
                resolved("v", "verbose", FlagKind::Bool, Some(FlagValue::Bool(true))),
                resolved("p", "port", FlagKind::Integer, None),
            ],
            false,
        );

        assert_eq!(
            lines,
            "-n, --name    <string>: bob\n\
             -v, --verbose <bool>: true\n\
             -p, --port    <integer>: (absent)"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[], false), "");
    }

    #[test]
    fn test_render_colored_keeps_values() {
        let line = render(
            &[resolved("p", "port", FlagKind::Integer, Some(FlagValue::Integer(8080)))],
            true,
        );
        assert!(line.contains("8080"));
        assert!(line.starts_with("-p, --port <integer>: "));
    }
}
