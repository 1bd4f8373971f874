//! Configuration validation logic
//!
//! This module provides validation methods for all configuration structures
//! to ensure configuration values are within acceptable ranges and formats.

use crate::config::error::ConfigError;
use crate::config::settings::{AlertsSettings, LoggerSettings, Settings};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl AlertsSettings {
    /// Validate alert settings
    ///
    /// # Validation Rules
    /// - Default notifier name must not be empty
    /// - Default area must not be empty
    /// - Every configured class must be a non-empty string
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_notifier.trim().is_empty() {
            return Err(ConfigError::validation(
                "alerts.default_notifier",
                "Default notifier name cannot be empty.",
            ));
        }

        if self.default_area.trim().is_empty() {
            return Err(ConfigError::validation(
                "alerts.default_area",
                "Default area cannot be empty.",
            ));
        }

        if let Some((kind, _)) = self.classes.iter().find(|(_, class)| class.trim().is_empty()) {
            return Err(ConfigError::ValidationError {
                field: format!("alerts.classes.{}", kind),
                message: "Class names cannot be empty.".to_string(),
            });
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// # Validation Rules
    /// - Level must be one of: trace, debug, info, warn, error
    /// - Format must be one of: full, compact, json
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid values are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        let format = self.format.to_lowercase();
        if !VALID_LOG_FORMATS.contains(&format.as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid values are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl Settings {
    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.alerts.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}
