//! Tests for reading and writing the TOML configuration file.

use moduliving::config::{CanvasMarker, Config, ThemeMode};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_nested_path_is_created_on_save() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("a").join("b").join("config.toml");

    let mut config = Config::new();
    config.ui.theme_mode = ThemeMode::Light;
    config.save_to(&path).unwrap();

    assert!(path.exists());
    assert!(!path.with_extension("toml.tmp").exists());
    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn test_file_format() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        "[ui]\ntheme_mode = \"Dark\"\nshow_help_on_startup = true\ncanvas_marker = \"Braille\"\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.theme_mode, ThemeMode::Dark);
    assert!(config.ui.show_help_on_startup);
    assert_eq!(config.ui.canvas_marker, CanvasMarker::Braille);
}

#[test]
fn test_malformed_file_reports_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[ui\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("config.toml"));
}

#[test]
fn test_empty_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "").unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}
