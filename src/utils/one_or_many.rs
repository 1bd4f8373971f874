//! Normalisation of "one value or a list of values" arguments.

use crate::models::Severity;

/// Accepts either a single string-like value or a collection of them.
///
/// Used for message texts passed to `alert` and for the values of a filter
/// call, so `where_type("error")` and `where_type(["error", "warning"])`
/// both work.
pub trait OneOrMany {
    fn into_vec(self) -> Vec<String>;
}

impl OneOrMany for &str {
    fn into_vec(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl OneOrMany for String {
    fn into_vec(self) -> Vec<String> {
        vec![self]
    }
}

impl OneOrMany for &String {
    fn into_vec(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl OneOrMany for Severity {
    fn into_vec(self) -> Vec<String> {
        vec![self.into()]
    }
}

impl<T: Into<String>> OneOrMany for Vec<T> {
    fn into_vec(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<String>, const N: usize> OneOrMany for [T; N] {
    fn into_vec(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Clone + Into<String>> OneOrMany for &[T] {
    fn into_vec(self) -> Vec<String> {
        self.iter().cloned().map(Into::into).collect()
    }
}
