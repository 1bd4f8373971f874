//! Chainable, immutable alert queries.
//!
//! Each `where_*` call returns a new [`AlertQuery`] value, so a half-built
//! chain can never leak its filters into another query on the same
//! aggregator.

use tracing::trace;

use super::alert_service::Alerts;
use crate::models::Message;
use crate::utils::OneOrMany;

/// Message dimension a predicate looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dimension {
    Area,
    Type,
}

/// One filter call: the message must (or must not) match one of `values`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Predicate {
    dimension: Dimension,
    values: Vec<String>,
    negated: bool,
}

impl Predicate {
    fn matches(&self, message: &Message) -> bool {
        let field = match self.dimension {
            Dimension::Area => message.area(),
            Dimension::Type => message.kind(),
        };
        let member = self.values.iter().any(|v| v == field);
        member != self.negated
    }
}

/// A filter chain over the messages of every notifier of an [`Alerts`].
///
/// Values inside a single call are alternatives; separate calls must all
/// hold.
#[derive(Clone)]
pub struct AlertQuery<'a> {
    alerts: &'a Alerts,
    predicates: Vec<Predicate>,
}

impl<'a> AlertQuery<'a> {
    pub(crate) fn new(alerts: &'a Alerts) -> Self {
        Self {
            alerts,
            predicates: Vec::new(),
        }
    }

    fn push(mut self, dimension: Dimension, values: impl OneOrMany, negated: bool) -> Self {
        self.predicates.push(Predicate {
            dimension,
            values: values.into_vec(),
            negated,
        });
        self
    }

    /// Keep messages displayed in one of the given areas.
    pub fn where_area(self, areas: impl OneOrMany) -> Self {
        self.push(Dimension::Area, areas, false)
    }

    /// Drop messages displayed in any of the given areas.
    pub fn where_not_area(self, areas: impl OneOrMany) -> Self {
        self.push(Dimension::Area, areas, true)
    }

    /// Keep messages of one of the given types.
    pub fn where_type(self, types: impl OneOrMany) -> Self {
        self.push(Dimension::Type, types, false)
    }

    /// Drop messages of any of the given types.
    pub fn where_not_type(self, types: impl OneOrMany) -> Self {
        self.push(Dimension::Type, types, true)
    }

    /// Whether `message` passes every filter of the chain.
    pub fn matches(&self, message: &Message) -> bool {
        self.predicates.iter().all(|p| p.matches(message))
    }

    /// Runs the query, preserving notifier registration order and the
    /// insertion order within each notifier.
    pub fn get(self) -> Vec<Message> {
        let gathered = self.alerts.all();
        let total = gathered.len();
        let result: Vec<Message> = gathered.into_iter().filter(|m| self.matches(m)).collect();
        trace!(
            total,
            matched = result.len(),
            filters = self.predicates.len(),
            "Alert query executed"
        );
        result
    }

    /// Runs the query with an extra `where_not_area(area)`.
    pub fn except(self, area: impl OneOrMany) -> Vec<Message> {
        self.where_not_area(area).get()
    }

    /// Number of messages the query would return.
    pub fn count(self) -> usize {
        self.get().len()
    }

    pub fn is_empty(self) -> bool {
        self.count() == 0
    }
}

impl std::fmt::Debug for AlertQuery<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertQuery")
            .field("predicates", &self.predicates)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predicate(dimension: Dimension, values: &[&str], negated: bool) -> Predicate {
        Predicate {
            dimension,
            values: values.into_vec(),
            negated,
        }
    }

    #[test]
    fn test_allow_predicate_is_or_within_values() {
        let p = predicate(Dimension::Type, &["error", "warning"], false);

        assert!(p.matches(&Message::new("a", "error", "default")));
        assert!(p.matches(&Message::new("b", "warning", "default")));
        assert!(!p.matches(&Message::new("c", "info", "default")));
    }

    #[test]
    fn test_deny_predicate() {
        let p = predicate(Dimension::Area, &["header"], true);

        assert!(!p.matches(&Message::new("a", "error", "header")));
        assert!(p.matches(&Message::new("b", "error", "footer")));
    }

    #[test]
    fn test_conflicting_predicates_match_nothing_in_that_area() {
        let alerts = Alerts::new();
        let query = alerts.where_area("header").where_not_area("header");

        assert!(!query.matches(&Message::new("a", "error", "header")));
        assert!(!query.matches(&Message::new("b", "error", "footer")));
    }

    #[test]
    fn test_empty_value_list_allows_nothing_and_denies_nothing() {
        let alerts = Alerts::new();
        let message = Message::new("a", "error", "header");

        assert!(!alerts.where_area(Vec::<String>::new()).matches(&message));
        assert!(alerts.where_not_area(Vec::<String>::new()).matches(&message));
    }

    #[test]
    fn test_repeated_calls_on_one_dimension_are_and() {
        let alerts = Alerts::new();
        let query = alerts.where_type(["error", "warning"]).where_type(["warning", "info"]);

        assert!(query.matches(&Message::new("a", "warning", "default")));
        assert!(!query.matches(&Message::new("b", "error", "default")));
        assert!(!query.matches(&Message::new("c", "info", "default")));
    }
}
