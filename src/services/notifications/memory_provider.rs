//! In-memory notifier.
//!
//! The reference backend used when the host wires in no framework storage.
//! Messages live as long as the notifier does.

use std::collections::BTreeMap;

use tracing::trace;

use super::provider::{Notifier, build_message};
use crate::config::settings::AlertsSettings;
use crate::models::{Message, Severity, lookup_form_error};
use crate::utils::ErrorBag;

/// Notifier keeping its messages in a plain vector.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
    messages: Vec<Message>,
    classes: BTreeMap<String, String>,
}

impl MemoryNotifier {
    /// Creates an empty notifier without class mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty notifier that tags messages with the given classes.
    pub fn with_classes(classes: BTreeMap<String, String>) -> Self {
        Self {
            messages: Vec::new(),
            classes,
        }
    }

    /// Creates an empty notifier using the configured class mapping.
    pub fn from_settings(settings: &AlertsSettings) -> Self {
        Self::with_classes(settings.classes.clone())
    }

    /// Registers one error message per field message, keyed by field name.
    pub fn add_form_errors<B: ErrorBag + ?Sized>(&mut self, bag: &B, area: &str) {
        for (field, messages) in bag.field_messages() {
            self.alert(messages, Severity::Error.as_str(), area, false, Some(&field));
        }
    }

    /// Text of the first error registered for `field`, if any.
    pub fn form(&self, field: &str) -> Option<String> {
        self.form_with(field, None, None)
    }

    /// Form lookup with an override for a match and a default for a miss.
    pub fn form_with(
        &self,
        field: &str,
        override_message: Option<&str>,
        default: Option<&str>,
    ) -> Option<String> {
        lookup_form_error(&self.messages, field, override_message, default)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drops every stored message.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl Notifier for MemoryNotifier {
    fn alert(
        &mut self,
        messages: Vec<String>,
        kind: &str,
        area: &str,
        _is_flash: bool,
        extra: Option<&str>,
    ) {
        trace!(count = messages.len(), kind, area, "Storing alerts in memory");
        for text in messages {
            let message = build_message(&self.classes, text, kind, area, extra);
            self.messages.push(message);
        }
    }

    fn all(&self) -> Vec<Message> {
        self.messages.clone()
    }
}
