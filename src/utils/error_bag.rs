//! Validation error bags consumed by the form-error mapping.

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use validator::ValidationErrors;

use crate::utils::OneOrMany;

/// Anything enumerable as field name to one or more error strings.
///
/// Implementations return fields in a deterministic order so that the
/// messages registered from a bag keep a stable insertion order.
pub trait ErrorBag {
    fn field_messages(&self) -> Vec<(String, Vec<String>)>;
}

impl ErrorBag for ValidationErrors {
    /// Field-level errors only, sorted by field name. Each error contributes
    /// its message, or its code when no message was set.
    fn field_messages(&self) -> Vec<(String, Vec<String>)> {
        let mut fields: Vec<(String, Vec<String>)> = self
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|error| match &error.message {
                        Some(message) => message.to_string(),
                        None => error.code.to_string(),
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        fields
    }
}

impl<K, V> ErrorBag for BTreeMap<K, V>
where
    K: AsRef<str>,
    V: OneOrMany + Clone,
{
    fn field_messages(&self) -> Vec<(String, Vec<String>)> {
        self.iter()
            .map(|(field, messages)| (field.as_ref().to_string(), messages.clone().into_vec()))
            .collect()
    }
}

impl<K, V> ErrorBag for IndexMap<K, V>
where
    K: AsRef<str>,
    V: OneOrMany + Clone,
{
    fn field_messages(&self) -> Vec<(String, Vec<String>)> {
        self.iter()
            .map(|(field, messages)| (field.as_ref().to_string(), messages.clone().into_vec()))
            .collect()
    }
}

impl<K, V, S> ErrorBag for HashMap<K, V, S>
where
    K: AsRef<str>,
    V: OneOrMany + Clone,
{
    fn field_messages(&self) -> Vec<(String, Vec<String>)> {
        let mut fields: Vec<(String, Vec<String>)> = self
            .iter()
            .map(|(field, messages)| (field.as_ref().to_string(), messages.clone().into_vec()))
            .collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        fields
    }
}
