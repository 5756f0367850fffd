//! # Configuration Tests
//!
//! Defaults, partial JSON documents and error reporting.

use std::io::Write;

use pretty_assertions::assert_eq;
use wspace_core::Vm;
use wspace_core::config::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.log_filter, "warn");
    assert_eq!(config.repl.prompt, "ws> ");
    assert_eq!(config.repl.continuation_prompt, "..> ");
    assert!(config.repl.show_segments);
    assert!(config.repl.show_pending);
}

#[test]
fn test_empty_object_equals_default() {
    let config = Config::from_json_str("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_sections_keep_defaults() {
    let config =
        Config::from_json_str(r#"{"general": {"trace_instructions": true}, "repl": {"prompt": "> "}}"#)
            .unwrap();
    assert!(config.general.trace_instructions);
    assert_eq!(config.general.log_filter, "warn");
    assert_eq!(config.repl.prompt, "> ");
    assert_eq!(config.repl.continuation_prompt, "..> ");
    assert!(config.repl.show_segments);
}

#[test]
fn test_full_document() {
    let json = r#"{
        "general": {"trace_instructions": false, "log_filter": "wspace_core=debug"},
        "repl": {"prompt": "$ ", "continuation_prompt": "| ", "show_segments": false, "show_pending": false}
    }"#;
    let config = Config::from_json_str(json).unwrap();
    assert_eq!(
        config,
        Config {
            general: GeneralConfig {
                trace_instructions: false,
                log_filter: "wspace_core=debug".to_owned(),
            },
            repl: ReplConfig {
                prompt: "$ ".to_owned(),
                continuation_prompt: "| ".to_owned(),
                show_segments: false,
                show_pending: false,
            },
        }
    );
}

#[test]
fn test_invalid_json_is_parse_error() {
    let err = Config::from_json_str(r#"{"general": {"trace_instructions": "yes"}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid config"));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"repl": {"show_segments": false}}"#).unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert!(!config.repl.show_segments);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_vm_from_config_takes_trace_flag() {
    let mut config = Config::default();
    assert!(!Vm::from_config(&config).trace_instructions);

    config.general.trace_instructions = true;
    assert!(Vm::from_config(&config).trace_instructions);
}
