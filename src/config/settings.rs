//! Configuration settings structures for alerts-rs
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, LogFormat, LoggerConfig};
use crate::models::{DEFAULT_AREA, Severity};

// ============================================================================
// Default value functions
// ============================================================================

fn default_notifier() -> String {
    "flash".to_string()
}

fn default_area() -> String {
    DEFAULT_AREA.to_string()
}

fn default_classes() -> BTreeMap<String, String> {
    Severity::ALL
        .iter()
        .map(|severity| {
            let class = match severity {
                Severity::Error => "alert-danger",
                Severity::Warning => "alert-warning",
                Severity::Success => "alert-success",
                Severity::Info => "alert-info",
            };
            (severity.as_str().to_string(), class.to_string())
        })
        .collect()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_format() -> String {
    "full".to_string()
}

// ============================================================================
// Alerts Configuration
// ============================================================================

/// Alert aggregation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertsSettings {
    /// Notifier used when an alert names none
    #[serde(default = "default_notifier")]
    pub default_notifier: String,

    /// Area used when an alert names none
    #[serde(default = "default_area")]
    pub default_area: String,

    /// Presentation class per message type
    #[serde(default = "default_classes")]
    pub classes: BTreeMap<String, String>,
}

impl Default for AlertsSettings {
    fn default() -> Self {
        Self {
            default_notifier: default_notifier(),
            default_area: default_area(),
            classes: default_classes(),
        }
    }
}

// ============================================================================
// Logger Configuration
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            colored: default_true(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Console output settings
    #[serde(default)]
    pub console: ConsoleSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: ConsoleSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert LoggerSettings to LoggerConfig
    ///
    /// This method transforms the configuration file representation into
    /// the runtime LoggerConfig used by the logger module.
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format = self.parse_format()?;
        let console = ConsoleConfig::new(self.console.colored);

        LoggerConfig::new(console, format, self.level).map_err(|e| ConfigError::ValidationError {
            field: "logger".to_string(),
            message: e.to_string(),
        })
    }

    /// Parse the format string into LogFormat enum
    fn parse_format(&self) -> Result<LogFormat, ConfigError> {
        self.format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::ValidationError {
                field: "logger.format".to_string(),
                message: e.to_string(),
            })
    }
}

// ============================================================================
// Root Settings
// ============================================================================

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Alert aggregation configuration
    #[serde(default)]
    pub alerts: AlertsSettings,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
}
