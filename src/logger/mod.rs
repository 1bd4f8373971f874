//! Logger Module
//!
//! Console logging based on `tracing-subscriber`, for hosts that do not
//! install their own subscriber. Supports:
//! - Level filtering through `EnvFilter`
//! - Full, Compact and JSON output formats
//! - Color control (disabled automatically when stdout is not a terminal)

pub mod config;
pub mod error;


// Re-export main types
pub use config::*;
pub use error::LoggerError;

use std::io::IsTerminal;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Initialize the global logger with the given configuration
///
/// Fails when the configuration is invalid or a global subscriber has
/// already been installed.
pub fn init_logger(config: LoggerConfig) -> anyhow::Result<()> {
    config.validate()?;

    // Create filter from level string
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let is_tty = std::io::stdout().is_terminal();
    let use_ansi = config.console.colored && is_tty;

    match config.format {
        LogFormat::Full => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_ansi(use_ansi)
                        .with_target(true)
                        .with_level(true),
                )
                .try_init()?;
        }
        LogFormat::Compact => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_ansi(use_ansi)
                        .with_target(true)
                        .compact(),
                )
                .try_init()?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).json())
                .try_init()?;
        }
    }

    Ok(())
}
