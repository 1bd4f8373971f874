//! Core notifier trait.
//!
//! This module provides the abstraction over alert storage backends, so the
//! aggregator never depends on a concrete session or view implementation.

use std::collections::BTreeMap;

use crate::models::Message;

/// Trait for alert storage backends (flash session, view data, memory, ...)
///
/// Backends are confined to a single request scope, so methods take plain
/// `&self`/`&mut self` and never block. `Send` lets an aggregator move between
/// threads between requests.
///
/// # Example Implementation
/// ```ignore
/// pub struct ViewNotifier {
///     shared: Vec<Message>,
/// }
///
/// impl Notifier for ViewNotifier {
///     fn alert(&mut self, messages: Vec<String>, kind: &str, area: &str, _is_flash: bool, extra: Option<&str>) {
///         // Implementation here
///     }
///
///     fn all(&self) -> Vec<Message> {
///         self.shared.clone()
///     }
/// }
/// ```
pub trait Notifier: Send {
    /// Registers one message per entry of `messages`
    ///
    /// # Arguments
    /// * `messages` - Message texts, in the order they should be stored
    /// * `kind` - Message type, e.g. `"error"`
    /// * `area` - Display area
    /// * `is_flash` - Backend hint: keep the messages for the next request
    /// * `extra` - Backend hint: sub-key stored on every message
    fn alert(
        &mut self,
        messages: Vec<String>,
        kind: &str,
        area: &str,
        is_flash: bool,
        extra: Option<&str>,
    );

    /// Returns a snapshot of every message currently held, in insertion order
    fn all(&self) -> Vec<Message>;
}

/// Builds a message the way the bundled adapters do: the class comes from the
/// type-to-class map, the extra key is attached when given.
pub(crate) fn build_message(
    classes: &BTreeMap<String, String>,
    text: String,
    kind: &str,
    area: &str,
    extra: Option<&str>,
) -> Message {
    let mut message = Message::new(text, kind, area);
    if let Some(class) = classes.get(kind) {
        message = message.with_class(class.as_str());
    }
    if let Some(extra) = extra {
        message = message.with_extra(extra);
    }
    message
}
