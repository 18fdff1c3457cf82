//! Tests for loading front-end configuration.

use ratatui::style::Color;
use std::io::Write;
use tictactoe_tui::{Palette, TuiConfig};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = TuiConfig::load_or_default(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, TuiConfig::default());
    assert_eq!(config.palette().unwrap(), Palette::default());
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_partial_file_overrides_some_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "x_color = \"green\"").unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();

    let config = TuiConfig::from_file(file.path()).unwrap();
    let palette = config.palette().unwrap();

    assert_eq!(palette.x, Color::Green);
    assert_eq!(palette.o, Color::Red);
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_invalid_toml_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "x_color = ").unwrap();

    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_unknown_colour_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "highlight_color = \"not-a-colour\"").unwrap();

    let config = TuiConfig::from_file(file.path()).unwrap();
    let err = config.palette().unwrap_err();
    assert!(err.message.contains("highlight_color"));
}

#[test]
fn test_log_file_keeps_earlier_runs() {
    use std::io::Read;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tictactoe_tui.log");

    writeln!(tictactoe_tui::open_log_file(&path).unwrap(), "first run").unwrap();
    writeln!(tictactoe_tui::open_log_file(&path).unwrap(), "second run").unwrap();

    let mut contents = String::new();
    std::fs::File::open(&path)
        .unwrap()
        .read_to_string(&mut contents)
        .unwrap();
    assert_eq!(contents, "first run\nsecond run\n");
}
