//! Loading flag tables from disk.
//!
//! A flag table file is a YAML list of flags:
//!
//! ```yaml
//! - short: n
//!   long: name
//!   kind: string
//!   description: Who to greet
//! - short: v
//!   long: verbose
//!   kind: bool
//! ```

use std::fs::File;

use log::info;

use crate::error::{Error, Result};
use crate::flags::{Flag, FlagTable};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Loads and declares the flags listed in a YAML file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - The file lists no flags
/// - A flag name is invalid or a spelling is declared twice
///
/// # Examples
///
/// ```no_run
/// use argscan_core::file_handling::get_flag_table;
///
/// let table = get_flag_table("/etc/myapp/flags.yml")?;
/// println!("Loaded {} flags", table.len());
/// # Ok::<(), argscan_core::error::Error>(())
/// ```
pub fn get_flag_table(path: &str) -> Result<FlagTable> {
    let reader = get_reader("flag table", path)?;

    let flags: Vec<Flag> = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "flag table".to_string(),
            path.to_string(),
            e,
        )
    })?;

    if flags.is_empty() {
        return Err(Error::empty_flag_table(path.to_string()));
    }

    let table = FlagTable::from_flags(flags)?;
    info!("Loaded {} flags from `{}`", table.len(), path);

    Ok(table)
}
