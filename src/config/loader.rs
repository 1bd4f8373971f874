//! Configuration loader for alerts-rs
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use tracing::debug;

use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for specific configuration file
const CONFIG_FILE_ENV: &str = "ALERTS_CONFIG_FILE";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "ALERTS";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

/// Configuration loader that handles layered configuration loading
///
/// The loader supports the following configuration sources (in order of priority):
/// 1. Built-in defaults (serde defaults of [`Settings`])
/// 2. A TOML file, when one is configured
/// 3. `ALERTS_*` environment variables (highest priority)
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Configuration file path (optional)
    config_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    ///
    /// Reads `ALERTS_CONFIG_FILE` to find the configuration file. Without it,
    /// only defaults and environment variables are used.
    pub fn new() -> Self {
        Self {
            config_file: std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from),
        }
    }

    /// Create a loader reading the given file
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_file: Some(path.into()),
        }
    }

    /// Get the configuration file path, if any
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Load configuration from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configured file does not exist
    /// - Configuration parsing fails
    /// - Configuration validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let builder = Config::builder();
        let builder = match self.config_file {
            Some(ref path) => Self::add_file_source(builder, path)?,
            None => builder,
        };
        Self::finish(builder)
    }

    /// Load configuration from TOML text instead of a file
    ///
    /// Environment variables still override the given values.
    pub fn load_from_str(content: &str) -> Result<Settings, ConfigError> {
        let builder = Config::builder().add_source(File::from_str(content, FileFormat::Toml));
        Self::finish(builder)
    }

    fn finish(builder: Builder) -> Result<Settings, ConfigError> {
        // Add environment variables (always highest priority)
        // ALERTS_ALERTS__DEFAULT_NOTIFIER -> alerts.default_notifier
        let config = Self::add_env_source(builder).build()?;

        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        // Validate the loaded settings
        settings.validate()?;

        debug!(
            default_notifier = %settings.alerts.default_notifier,
            default_area = %settings.alerts.default_area,
            "Configuration loaded"
        );
        Ok(settings)
    }

    /// Add a required file source to the config builder
    fn add_file_source(builder: Builder, path: &Path) -> Result<Builder, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                path.display()
            )));
        }

        Ok(builder.add_source(
            File::new(path.to_str().unwrap_or_default(), FileFormat::Toml).required(true),
        ))
    }

    /// Add environment variable source to the config builder
    ///
    /// Environment variables with prefix `ALERTS_` are mapped to configuration keys.
    /// Double underscores (`__`) are used as separators for nested keys.
    ///
    /// Examples:
    /// - `ALERTS_ALERTS__DEFAULT_NOTIFIER` -> `alerts.default_notifier`
    /// - `ALERTS_LOGGER__LEVEL` -> `logger.level`
    fn add_env_source(builder: Builder) -> Builder {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Global mutex to ensure tests run sequentially to avoid env var conflicts
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to safely set environment variables for a test
    struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new() -> Self {
            Self {
                vars_to_restore: Vec::new(),
            }
        }

        fn set(&mut self, key: &str, value: &str) {
            let original = std::env::var(key).ok();
            self.vars_to_restore.push((key.to_string(), original));
            unsafe {
                std::env::set_var(key, value);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, original) in self.vars_to_restore.drain(..).rev() {
                unsafe {
                    match original {
                        Some(value) => std::env::set_var(&key, value),
                        None => std::env::remove_var(&key),
                    }
                }
            }
        }
    }

    fn write_config(content: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("alerts.toml");
        fs::write(&path, content).expect("Failed to write config file");
        (temp_dir, path)
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let _lock = TEST_MUTEX.lock().unwrap();

        let settings = ConfigLoader::default().load().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let (_dir, path) = write_config(
            r#"
            [alerts]
            default_notifier = "view"
            default_area = "main"

            [alerts.classes]
            error = "is-danger"
            "#,
        );

        let loader = ConfigLoader::with_file(&path);
        assert_eq!(loader.config_file(), Some(path.as_path()));

        let settings = loader.load().unwrap();
        assert_eq!(settings.alerts.default_notifier, "view");
        assert_eq!(settings.alerts.default_area, "main");
        assert_eq!(settings.alerts.classes.len(), 1);
        assert_eq!(settings.alerts.classes["error"], "is-danger");
    }

    #[test]
    fn test_missing_file_is_reported() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();

        let result = ConfigLoader::with_file(temp_dir.path().join("absent.toml")).load();
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_env_overrides_file() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let (_dir, path) = write_config(
            r#"
            [alerts]
            default_notifier = "view"

            [logger]
            level = "warn"
            "#,
        );

        let mut env = EnvGuard::new();
        env.set("ALERTS_ALERTS__DEFAULT_NOTIFIER", "session");
        env.set("ALERTS_LOGGER__CONSOLE__COLORED", "false");

        let settings = ConfigLoader::with_file(&path).load().unwrap();
        assert_eq!(settings.alerts.default_notifier, "session");
        assert_eq!(settings.logger.level, "warn");
        assert!(!settings.logger.console.colored);
    }

    #[test]
    fn test_new_reads_config_file_env() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let (_dir, path) = write_config("[logger]\nformat = \"compact\"\n");

        let mut env = EnvGuard::new();
        env.set(CONFIG_FILE_ENV, path.to_str().unwrap());

        let loader = ConfigLoader::new();
        assert_eq!(loader.config_file(), Some(path.as_path()));
        assert_eq!(loader.load().unwrap().logger.format, "compact");
    }

    #[test]
    fn test_load_from_str_validates() {
        let _lock = TEST_MUTEX.lock().unwrap();

        let result = ConfigLoader::load_from_str("[logger]\nlevel = \"chatty\"\n");
        match result {
            Err(ConfigError::ValidationError { field, .. }) => assert_eq!(field, "logger.level"),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_str_rejects_malformed_toml() {
        let _lock = TEST_MUTEX.lock().unwrap();

        let result = ConfigLoader::load_from_str("[alerts\ndefault_notifier = ");
        assert!(matches!(result, Err(ConfigError::Other(_))));
    }
}
