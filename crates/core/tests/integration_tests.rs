//! Integration tests for argscan-core
//!
//! These tests verify that flag tables, lookups and validation work together
//! by testing complete workflows end-to-end.

use argscan_core::{
    config::get_flag_table_path,
    error::Error,
    file_handling::get_flag_table,
    flags::{Flag, FlagKind, FlagTable},
    parser::{ArgParser, FlagValue},
};
use std::io::Write;
use tempfile::NamedTempFile;

/// Test loading a flag table and parsing a full argument list against it
#[test]
fn test_complete_flag_table_workflow() {
    let yaml_content = r#"
- short: h
  long: help
  kind: bool
  description: "Print help"
- short: n
  long: name
  kind: string
  description: "Who to greet"
- short: p
  long: port
  kind: integer
- short: v
  long: verbose
  kind: bool
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{yaml_content}").unwrap();
    let temp_path = get_flag_table_path(temp_file.path().to_str());

    let table = get_flag_table(&temp_path).unwrap();
    assert_eq!(table.len(), 4);

    let parser = ArgParser::with_flags(["serve", "--name", "bob", "-p", "8080", "-v"], table);
    parser.validate().unwrap();

    assert_eq!(parser.string("n", "name"), Some("bob".to_string()));
    assert_eq!(parser.integer("p", "port"), Some(8080));
    assert!(parser.flag("v", "verbose"));
    assert!(!parser.help());

    let resolved = parser.resolve().unwrap();
    let summary: Vec<(String, Option<FlagValue>)> = resolved
        .into_iter()
        .map(|r| (r.flag.long, r.value))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("help".to_string(), Some(FlagValue::Bool(false))),
            ("name".to_string(), Some(FlagValue::Str("bob".to_string()))),
            ("port".to_string(), Some(FlagValue::Integer(8080))),
            ("verbose".to_string(), Some(FlagValue::Bool(true))),
        ]
    );
}

/// Test that an unknown flag is rejected no matter which lookups ran
#[test]
fn test_validation_rejects_unknown_flag() {
    let table = FlagTable::from_flags([
        Flag::new("n", "name", FlagKind::String),
        Flag::new("v", "verbose", FlagKind::Bool),
    ])
    .unwrap();
    let parser = ArgParser::with_flags(["--name", "x", "--bogus"], table);

    // Lookups first, then validation, and the reverse, give the same answer
    assert_eq!(parser.string("n", "name"), Some("x".to_string()));
    let error = parser.validate().unwrap_err();
    assert!(matches!(error, Error::UnknownArgument { ref argument, .. } if argument == "--bogus"));
    assert!(error.to_string().starts_with("unknown argument: --bogus"));
}

/// Test that help must be declared to pass validation
#[test]
fn test_help_declaration() {
    let undeclared = ArgParser::with_flags(["--help"], FlagTable::new());
    assert!(undeclared.help());
    assert!(undeclared.validate().is_err());

    let declared = ArgParser::with_flags(["--help"], FlagTable::with_help());
    assert!(declared.help());
    assert!(declared.validate().is_ok());
}

/// Test the lenient and strict integer accessors side by side
#[test]
fn test_integer_leniency() {
    let parser = ArgParser::new(["-p", "abc"]);

    assert_eq!(parser.integer("p", "port"), None);
    assert!(matches!(
        parser.value::<i64>("p", "port"),
        Err(Error::MalformedValue { .. })
    ));
}

/// Test that a shared parser can be read from several threads
#[test]
fn test_parser_is_shareable() {
    let parser = std::sync::Arc::new(ArgParser::new(["--name", "bob"]));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let parser = std::sync::Arc::clone(&parser);
            std::thread::spawn(move || parser.string("n", "name"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some("bob".to_string()));
    }
}
