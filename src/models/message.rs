//! Alert message value type and the conventional severities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Area used when the caller does not name one.
pub const DEFAULT_AREA: &str = "default";

// ============================================================================
// Severity
// ============================================================================

/// The four conventional alert severities.
///
/// Message types stay free-form strings; this enum only names the common
/// ones so callers do not have to spell them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Success,
    Info,
}

impl Severity {
    /// Every conventional severity, most severe first.
    pub const ALL: [Severity; 4] = [
        Severity::Error,
        Severity::Warning,
        Severity::Success,
        Severity::Info,
    ];

    /// Convert the severity to the type string stored on messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Success => "success",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "success" => Ok(Severity::Success),
            "info" => Ok(Severity::Info),
            _ => Err(format!(
                "Invalid severity '{}'. Valid values are: error, warning, success, info",
                s
            )),
        }
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        severity.as_str().to_string()
    }
}

// ============================================================================
// Message
// ============================================================================

/// A single alert as stored by a notifier backend.
///
/// Messages are immutable once built; two messages with the same fields are
/// interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    text: String,
    #[serde(rename = "type")]
    kind: String,
    area: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extra: Option<String>,
}

impl Message {
    /// Creates a message without class or extra key.
    pub fn new(text: impl Into<String>, kind: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: kind.into(),
            area: area.into(),
            class: None,
            extra: None,
        }
    }

    /// Sets the presentation class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Sets the extra sub-key (the field name for form errors).
    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The message type, e.g. `"error"`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn extra(&self) -> Option<&str> {
        self.extra.as_deref()
    }

    /// Whether this is an error registered for the given form field.
    pub fn is_form_error_for(&self, field: &str) -> bool {
        self.kind == Severity::Error.as_str() && self.extra.as_deref() == Some(field)
    }
}

/// Looks up the form error for `field` among `messages`.
///
/// A match yields `override_message` when given, else the stored text. No
/// match yields `default`.
pub(crate) fn lookup_form_error<'a, I>(
    messages: I,
    field: &str,
    override_message: Option<&str>,
    default: Option<&str>,
) -> Option<String>
where
    I: IntoIterator<Item = &'a Message>,
{
    match messages.into_iter().find(|m| m.is_form_error_for(field)) {
        Some(message) => Some(override_message.unwrap_or(message.text()).to_string()),
        None => default.map(str::to_string),
    }
}
