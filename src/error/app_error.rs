use thiserror::Error;

/// Error type for the alert aggregation layer.
///
/// Both lookup failures are programming errors on the host side (a notifier
/// that was never wired in), not runtime faults. Nothing in this crate retries
/// them.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found error with entity, field, and value information
    #[error("Resource not found: {entity} with {field}={value}")]
    NotFound {
        entity: String,
        field: String,
        value: String,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Flash payload could not be encoded or decoded
    #[error("Serialization failed")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl AppError {
    /// Builds the `NotFound` error for an unregistered notifier name.
    pub fn notifier_not_found(name: &str) -> Self {
        AppError::NotFound {
            entity: "notifier".to_string(),
            field: "name".to_string(),
            value: name.to_string(),
        }
    }

    /// Builds a `Configuration` error for the given key.
    pub fn configuration(key: impl Into<String>, message: impl Into<String>) -> Self {
        let message: String = message.into();
        AppError::Configuration {
            key: key.into(),
            source: anyhow::anyhow!(message),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
