//! Configuration module for `StudyHub`

use crate::core::theme::Theme;
use crate::core::timer::PomodoroDurations;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the config directory inside string values
const DIR_VARIABLE: &str = "$STUDY_HUB";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Pomodoro timer configuration
///
/// A value of `0` means "not set" and is filled from defaults on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Length of a focus period in minutes
    #[serde(default)]
    pub focus_minutes: u32,
    /// Length of a break period in minutes
    #[serde(default)]
    pub break_minutes: u32,
}

/// Appearance configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Theme preference (light or dark)
    #[serde(default)]
    pub theme: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Timer settings
    #[serde(default)]
    pub timer: TimerConfig,
    /// Appearance settings
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override focus length in minutes
    pub focus_minutes: Option<u32>,
    /// Override break length in minutes
    pub break_minutes: Option<u32>,
}

fn parse_minutes(key: &str, value: &str) -> Result<u32, String> {
    match value.parse::<u32>() {
        Ok(0) => Err(format!("'{key}' must be at least 1 minute")),
        Ok(minutes) => Ok(minutes),
        Err(_) => Err(format!("Invalid number of minutes for '{key}': '{value}'")),
    }
}

impl Config {
    /// Get the `$STUDY_HUB` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/studyhub`
    /// - macOS: `~/Library/Application Support/studyhub`
    /// - Windows: `%APPDATA%\studyhub`
    #[must_use]
    pub fn get_studyhub_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("studyhub")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used when loading so that fields added in newer releases are populated
    /// while existing user settings are kept. Only empty (or zero) fields are
    /// filled.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.timer.focus_minutes == 0 && defaults.timer.focus_minutes != 0 {
            self.timer.focus_minutes = defaults.timer.focus_minutes;
            changed = true;
        }
        if self.timer.break_minutes == 0 && defaults.timer.break_minutes != 0 {
            self.timer.break_minutes = defaults.timer.break_minutes;
            changed = true;
        }

        if self.appearance.theme.is_empty() && !defaults.appearance.theme.is_empty() {
            self.appearance.theme.clone_from(&defaults.appearance.theme);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only; the config file is not modified.
    /// Only non-`None` values replace config values.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut config = Config::load();
    /// let overrides = ConfigOverrides {
    ///     focus_minutes: Some(50),
    ///     ..Default::default()
    /// };
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(minutes) = overrides.focus_minutes {
            self.timer.focus_minutes = minutes;
        }
        if let Some(minutes) = overrides.break_minutes {
            self.timer.break_minutes = minutes;
        }
    }

    /// Copy of this configuration with `overrides` applied
    ///
    /// The copy is the runtime view; commands that persist settings keep
    /// working on `self` so run-only overrides never reach the config file.
    #[must_use]
    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> Self {
        let mut runtime = self.clone();
        runtime.apply_overrides(overrides);
        runtime
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// the directory returned by [`get_studyhub_dir`].
    ///
    /// [`get_studyhub_dir`]: Self::get_studyhub_dir
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_studyhub_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$STUDY_HUB` in a string to the config directory path
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_studyhub_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults (empty strings, zero, false) and
    /// `$STUDY_HUB` is expanded in path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;
        config.logging.file = Self::expand_variables(&config.logging.file);
        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the compiled-in default configuration cannot be parsed, which
    /// would be a packaging bug caught by the test suite.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: load it, merge missing fields from defaults
    ///   and save the result when anything was added.
    /// - On first run: create the config directory and write the defaults.
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to the platform-specific config file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to an explicit path
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created or the file
    /// cannot be written.
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str)?;
        Ok(())
    }

    /// Pomodoro durations derived from the `[timer]` section
    ///
    /// Unset (zero) values fall back to the 25/5 minute defaults.
    #[must_use]
    pub fn pomodoro_durations(&self) -> PomodoroDurations {
        let defaults = PomodoroDurations::default();
        let focus_secs = match self.timer.focus_minutes {
            0 => defaults.focus_secs,
            minutes => u64::from(minutes) * 60,
        };
        let break_secs = match self.timer.break_minutes {
            0 => defaults.break_secs,
            minutes => u64::from(minutes) * 60,
        };
        PomodoroDurations {
            focus_secs,
            break_secs,
        }
    }

    /// Stored theme preference, light when unset or unrecognized
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.appearance.theme.parse().unwrap_or_default()
    }

    /// Store a theme preference (call [`save()`](Config::save) to persist it)
    pub fn set_theme(&mut self, theme: Theme) {
        self.appearance.theme = theme.to_string();
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `focus_minutes`,
    /// `break_minutes`, `theme`. Dashed spellings are accepted too.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "focus_minutes" | "focus-minutes" => Some(self.timer.focus_minutes.to_string()),
            "break_minutes" | "break-minutes" => Some(self.timer.break_minutes.to_string()),
            "theme" => Some(self.appearance.theme.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed (e.g. `"maybe"` for `verbose`, `0` for `focus_minutes`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                value.parse::<crate::logger::Level>()?;
                self.logging.level = value.to_ascii_lowercase();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "focus_minutes" | "focus-minutes" => {
                self.timer.focus_minutes = parse_minutes("focus_minutes", value)?;
            }
            "break_minutes" | "break-minutes" => {
                self.timer.break_minutes = parse_minutes("break_minutes", value)?;
            }
            "theme" => self.set_theme(value.parse()?),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "focus_minutes" | "focus-minutes" => {
                self.timer.focus_minutes = defaults.timer.focus_minutes;
            }
            "break_minutes" | "break-minutes" => {
                self.timer.break_minutes = defaults.timer.break_minutes;
            }
            "theme" => self.appearance.theme.clone_from(&defaults.appearance.theme),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// The next [`load()`](Config::load) recreates it. Succeeds when no file exists.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[timer]")?;
        writeln!(f, "  focus_minutes = {}", self.timer.focus_minutes)?;
        writeln!(f, "  break_minutes = {}", self.timer.break_minutes)?;

        writeln!(f, "\n[appearance]")?;
        writeln!(f, "  theme = \"{}\"", self.appearance.theme)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes_rejects_zero_and_garbage() {
        assert_eq!(parse_minutes("focus_minutes", "25"), Ok(25));
        assert!(parse_minutes("focus_minutes", "0").is_err());
        assert!(parse_minutes("focus_minutes", "-3").is_err());
        assert!(parse_minutes("focus_minutes", "soon").is_err());
    }

    #[test]
    fn test_expand_variables_passthrough() {
        assert_eq!(Config::expand_variables("/tmp/app.log"), "/tmp/app.log");
        let expanded = Config::expand_variables("$STUDY_HUB/logs/app.log");
        assert!(!expanded.contains(DIR_VARIABLE));
        assert!(expanded.ends_with("logs/app.log"));
    }
}
