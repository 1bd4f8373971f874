//! Flash notifier.
//!
//! Keeps the two halves of session flash storage in memory: messages visible
//! during the current request and messages flashed for the next one. The host
//! calls [`FlashNotifier::advance`] at each request boundary and may persist
//! the pending bag between requests with the JSON payload helpers.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::provider::{Notifier, build_message};
use crate::config::settings::AlertsSettings;
use crate::error::AppResult;
use crate::models::Message;

/// Notifier honouring the `is_flash` hint.
#[derive(Debug, Clone, Default)]
pub struct FlashNotifier {
    current: Vec<Message>,
    next: Vec<Message>,
    classes: BTreeMap<String, String>,
}

impl FlashNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty notifier that tags messages with the given classes.
    pub fn with_classes(classes: BTreeMap<String, String>) -> Self {
        Self {
            classes,
            ..Self::default()
        }
    }

    /// Creates an empty notifier using the configured class mapping.
    pub fn from_settings(settings: &AlertsSettings) -> Self {
        Self::with_classes(settings.classes.clone())
    }

    /// Restores the messages flashed by the previous request.
    ///
    /// The decoded messages become visible immediately; nothing is pending.
    pub fn from_session_payload(payload: &str) -> AppResult<Self> {
        let current: Vec<Message> = serde_json::from_str(payload)?;
        debug!(count = current.len(), "Restored flashed alerts from session");
        Ok(Self {
            current,
            ..Self::default()
        })
    }

    /// Like [`FlashNotifier::from_session_payload`], keeping a class mapping
    /// for messages raised afterwards.
    pub fn from_session_payload_with_classes(
        payload: &str,
        classes: BTreeMap<String, String>,
    ) -> AppResult<Self> {
        let mut notifier = Self::from_session_payload(payload)?;
        notifier.classes = classes;
        Ok(notifier)
    }

    /// Serialises the pending flash bag for storage in the session.
    pub fn to_session_payload(&self) -> AppResult<String> {
        Ok(serde_json::to_string(&self.next)?)
    }

    /// Messages flashed for the next request.
    pub fn flashed(&self) -> &[Message] {
        &self.next
    }

    /// Request boundary: flashed messages become current, the rest expire.
    pub fn advance(&mut self) {
        debug!(
            expired = self.current.len(),
            promoted = self.next.len(),
            "Advancing flash notifier"
        );
        self.current = std::mem::take(&mut self.next);
    }

    /// Keeps the current messages for one more request.
    pub fn reflash(&mut self) {
        self.next.extend(self.current.iter().cloned());
    }
}

impl Notifier for FlashNotifier {
    fn alert(
        &mut self,
        messages: Vec<String>,
        kind: &str,
        area: &str,
        is_flash: bool,
        extra: Option<&str>,
    ) {
        trace!(count = messages.len(), kind, area, is_flash, "Storing flash alerts");
        let target = if is_flash {
            &mut self.next
        } else {
            &mut self.current
        };
        for text in messages {
            target.push(build_message(&self.classes, text, kind, area, extra));
        }
    }

    fn all(&self) -> Vec<Message> {
        self.current.clone()
    }
}
