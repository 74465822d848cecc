//! Configuration path utilities for argscan.
//!
//! This module resolves the location of the flag table and expands shell
//! variables like `~` in paths.

/// Default path for the flag table file
const DEFAULT_FLAG_TABLE_PATH: &str = "~/.argscan/flags.yml";

/// Resolves the flag table file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// flag table path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use argscan_core::config::get_flag_table_path;
///
/// // Use default path
/// let default_path = get_flag_table_path(None);
///
/// // Use custom path
/// let custom_path = get_flag_table_path(Some("/path/to/flags.yml"));
/// assert_eq!(custom_path, "/path/to/flags.yml");
/// ```
pub fn get_flag_table_path(flag_table_path_arg: Option<&str>) -> String {
    let flag_table_path = flag_table_path_arg.unwrap_or(DEFAULT_FLAG_TABLE_PATH);

    shellexpand::tilde(flag_table_path).to_string()
}
