//! Integration tests for configuration management

use std::fs;
use std::path::PathBuf;
use study_hub::config::{Config, ConfigOverrides};
use study_hub::core::theme::Theme;
use study_hub::core::timer::PomodoroDurations;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("nested").join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert_eq!(config.timer.focus_minutes, 25);
    assert_eq!(config.timer.break_minutes, 5);
    assert_eq!(config.theme(), Theme::Light);
    assert_eq!(config.pomodoro_durations(), PomodoroDurations::default());
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[timer]
focus_minutes = 50
break_minutes = 10

[appearance]
theme = "dark"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.theme(), Theme::Dark);
    assert_eq!(
        config.pomodoro_durations(),
        PomodoroDurations {
            focus_secs: 3000,
            break_secs: 600,
        }
    );
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.timer.focus_minutes, 0);
    // Unset durations still yield the standard pomodoro
    assert_eq!(config.pomodoro_durations(), PomodoroDurations::default());
    assert_eq!(config.theme(), Theme::Light);
}

#[test]
fn test_config_rejects_wrong_types() {
    let toml_str = r#"
[timer]
focus_minutes = "long"
"#;
    assert!(Config::from_toml(toml_str).is_err());
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$STUDY_HUB/test.log"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("studyhub"));
    assert!(!config.logging.file.contains("$STUDY_HUB"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "DEBUG").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");
    assert!(config.set("level", "loud").is_err());

    config.set("verbose", "true").expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.set("verbose", "maybe").is_err());

    config.set("focus-minutes", "40").expect("Failed to set focus");
    assert_eq!(config.get("focus_minutes").unwrap(), "40");
    assert!(config.set("break_minutes", "0").is_err());

    config.set("theme", "Dark").expect("Failed to set theme");
    assert_eq!(config.get("theme").unwrap(), "dark");
    assert!(config.set("theme", "purple").is_err());

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "error").expect("Failed to set level");
    config.set("focus_minutes", "90").expect("Failed to set focus");
    config.set("theme", "dark").expect("Failed to set theme");

    for key in ["level", "focus_minutes", "theme"] {
        config.unset(key, &defaults).expect("Failed to unset");
    }
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.timer.focus_minutes, defaults.timer.focus_minutes);
    assert_eq!(config.appearance.theme, defaults.appearance.theme);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set_theme(Theme::Dark);
    config.save_to(&config_file).expect("Failed to save config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse saved config");

    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.theme(), Theme::Dark);
    assert_eq!(loaded.timer.focus_minutes, config.timer.focus_minutes);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        focus_minutes: Some(45),
        break_minutes: Some(15),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.pomodoro_durations().focus_secs, 45 * 60);
    assert_eq!(config.pomodoro_durations().break_secs, 15 * 60);
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.timer.break_minutes;

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..Default::default()
    };
    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.timer.break_minutes, before);
}

#[test]
fn test_run_only_overrides_are_not_saved() {
    let (_temp_dir, config_file) = setup_temp_config();
    let mut stored = Config::from_defaults();
    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        focus_minutes: Some(50),
        break_minutes: Some(12),
        ..Default::default()
    };

    let runtime = stored.with_overrides(&overrides);
    assert_eq!(runtime.pomodoro_durations().focus_secs, 50 * 60);
    assert_eq!(runtime.logging.level, "error");

    // What `theme toggle` does: change the stored copy and persist it
    stored.set_theme(stored.theme().toggled());
    stored.save_to(&config_file).expect("Failed to save config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let reloaded = Config::from_toml(&content).expect("Failed to parse saved config");
    assert_eq!(reloaded.theme(), Theme::Dark);
    assert_eq!(reloaded.timer.focus_minutes, 25);
    assert_eq!(reloaded.timer.break_minutes, 5);
    assert_eq!(reloaded.logging.level, Config::from_defaults().logging.level);
    assert!(!content.contains("focus_minutes = 50"));
}

#[test]
fn test_config_display_format() {
    let display_str = Config::from_defaults().to_string();

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[timer]"));
    assert!(display_str.contains("[appearance]"));
    assert!(display_str.contains("focus_minutes = 25"));
    assert!(display_str.contains("theme = \"light\""));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.timer.focus_minutes, 25);
    assert_eq!(config.appearance.theme, "light");

    // A second merge has nothing left to add
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[timer]
focus_minutes = 30

[appearance]
theme = "dark"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    config.merge_defaults(&Config::from_defaults());

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.timer.focus_minutes, 30);
    assert_eq!(config.theme(), Theme::Dark);
}

#[test]
fn test_get_studyhub_dir() {
    let dir = Config::get_studyhub_dir();

    assert!(dir.to_string_lossy().contains("studyhub"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
