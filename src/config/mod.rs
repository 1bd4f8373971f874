//! Configuration management module for alerts-rs
//!
//! This module provides layered configuration loading with support for:
//! - Built-in defaults
//! - A TOML configuration file
//! - Environment variable overrides
//!
//! # Configuration Priority (lowest to highest)
//! 1. Defaults compiled into the settings structures
//! 2. The file given to the loader, or named by `ALERTS_CONFIG_FILE`
//! 3. `ALERTS_*` environment variables
//!
//! # Example
//!
//! ```toml
//! [alerts]
//! default_notifier = "flash"
//! default_area = "default"
//!
//! [alerts.classes]
//! error = "alert-danger"
//! info = "alert-info"
//!
//! [logger]
//! level = "debug"
//! format = "compact"
//! ```

pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

// Re-export public types
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{AlertsSettings, ConsoleSettings, LoggerSettings, Settings};
