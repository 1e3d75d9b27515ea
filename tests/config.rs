//! Configuration system tests
//!
//! Tests for config paths and editor config loading/saving.

use tagfield::config::EditorConfig;
use tagfield::config_paths;
use tagfield::{LabelMap, TemplateEditor};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("tagfield"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Editor Config Tests
// ========================================================================

#[test]
fn test_default_config_is_empty() {
    let config = EditorConfig::default();
    assert!(config.labels.is_empty());
    assert!(config.fallbacks.is_empty());
    assert!(config.placeholder.contains("{{firstName}}"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = EditorConfig::load_from(&dir.path().join("nope.yaml"));
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn test_invalid_yaml_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "labels: [not, a, map").unwrap();
    assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "labels:\n  firstName: First Name\n  email: Email Address\n",
    )
    .unwrap();

    let config = EditorConfig::load_from(&path);
    assert_eq!(config.labels.get("email"), Some("Email Address"));
    assert!(config.fallbacks.is_empty());
    assert_eq!(config.placeholder, EditorConfig::default().placeholder);
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let mut config = EditorConfig {
        labels: LabelMap::new().with("email", "Email Address"),
        ..EditorConfig::default()
    };
    config
        .fallbacks
        .insert("firstName".to_string(), "friend".to_string());

    config.save_to(&path).unwrap();
    assert_eq!(EditorConfig::load_from(&path), config);
}

#[test]
fn test_editor_from_config_uses_labels_and_fallbacks() {
    let mut config = EditorConfig {
        labels: LabelMap::new().with("email", "Email Address"),
        ..EditorConfig::default()
    };
    config
        .fallbacks
        .insert("email".to_string(), "none".to_string());

    let editor = TemplateEditor::from_config("{{email}}", &config);
    let tag = editor.widgets().iter().next().unwrap();
    assert_eq!(tag.display_text(), "Email Address | none");
}
