//! Alert aggregator.
//!
//! [`Alerts`] owns the named notifiers of one request scope, routes raised
//! alerts to them and answers queries over the union of their messages. It
//! never stores messages itself.

use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use super::provider::Notifier;
use super::query::AlertQuery;
use crate::config::settings::AlertsSettings;
use crate::error::{AppError, AppResult};
use crate::models::{DEFAULT_AREA, Message, Severity, lookup_form_error};
use crate::utils::{ErrorBag, OneOrMany};

/// Options for raising an alert.
///
/// `&str` and `String` convert into options that only set the area, so
/// `alerts.error("Nope", "header")` reads naturally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertOptions {
    /// Display area; the aggregator's default area when `None`
    pub area: Option<String>,
    /// Hint for flash-capable notifiers: keep for the next request
    pub flash: bool,
    /// Sub-key stored on the messages
    pub extra: Option<String>,
    /// Target notifier; the default notifier when `None`
    pub notifier: Option<String>,
}

impl AlertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    pub fn flash(mut self) -> Self {
        self.flash = true;
        self
    }

    pub fn extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }

    pub fn notifier(mut self, name: impl Into<String>) -> Self {
        self.notifier = Some(name.into());
        self
    }
}

impl From<&str> for AlertOptions {
    fn from(area: &str) -> Self {
        Self::default().area(area)
    }
}

impl From<String> for AlertOptions {
    fn from(area: String) -> Self {
        Self::default().area(area)
    }
}

/// Aggregates alerts from any number of named notifiers.
pub struct Alerts {
    notifiers: IndexMap<String, Box<dyn Notifier>>,
    default_notifier: Option<String>,
    default_area: String,
}

impl Alerts {
    /// Creates an aggregator without notifiers or default notifier.
    pub fn new() -> Self {
        Self {
            notifiers: IndexMap::new(),
            default_notifier: None,
            default_area: DEFAULT_AREA.to_string(),
        }
    }

    /// Creates an aggregator whose default notifier and area come from
    /// configuration.
    ///
    /// Notifiers still have to be registered by the host.
    pub fn from_settings(settings: &AlertsSettings) -> Self {
        let mut alerts = Self::new();
        alerts.set_default_notifier(settings.default_notifier.as_str());
        alerts.default_area = settings.default_area.clone();
        alerts
    }

    // ========================================================================
    // Notifier Management
    // ========================================================================

    /// Registers `notifier` under `name`, replacing any previous one.
    ///
    /// A replaced notifier keeps its position in the registration order.
    pub fn add_notifier<N>(&mut self, name: impl Into<String>, notifier: N)
    where
        N: Notifier + 'static,
    {
        let name = name.into();
        let replaced = self.notifiers.insert(name.clone(), Box::new(notifier)).is_some();
        debug!(notifier = %name, replaced, "Registered notifier");
    }

    /// Removes the notifier registered under `name`; unknown names are ignored.
    pub fn remove_notifier(&mut self, name: &str) {
        if self.notifiers.shift_remove(name).is_some() {
            debug!(notifier = %name, "Removed notifier");
        }
    }

    /// Returns the notifier registered under `name`
    ///
    /// # Returns
    /// The notifier if registered, NotFound error otherwise
    pub fn notifier(&self, name: &str) -> AppResult<&dyn Notifier> {
        match self.notifiers.get(name) {
            Some(notifier) => Ok(&**notifier),
            None => Err(AppError::notifier_not_found(name)),
        }
    }

    /// Mutable variant of [`Alerts::notifier`].
    pub fn notifier_mut(&mut self, name: &str) -> AppResult<&mut dyn Notifier> {
        match self.notifiers.get_mut(name) {
            Some(notifier) => Ok(&mut **notifier),
            None => Err(AppError::notifier_not_found(name)),
        }
    }

    /// Registered notifier names, in registration order.
    pub fn notifier_names(&self) -> impl Iterator<Item = &str> {
        self.notifiers.keys().map(String::as_str)
    }

    pub fn has_notifier(&self, name: &str) -> bool {
        self.notifiers.contains_key(name)
    }

    /// Sets the notifier used when a call names none. Not checked against
    /// the registered notifiers until it is used.
    pub fn set_default_notifier(&mut self, name: impl Into<String>) {
        let name = name.into();
        debug!(notifier = %name, "Default notifier set");
        self.default_notifier = Some(name);
    }

    pub fn default_notifier(&self) -> Option<&str> {
        self.default_notifier.as_deref()
    }

    pub fn clear_default_notifier(&mut self) {
        self.default_notifier = None;
    }

    /// Area used for alerts raised without one.
    pub fn default_area(&self) -> &str {
        &self.default_area
    }

    pub fn set_default_area(&mut self, area: impl Into<String>) {
        self.default_area = area.into();
    }

    /// Finds the notifier an alert should go to: the explicit name, else
    /// the default.
    fn resolve(&mut self, explicit: Option<&str>) -> AppResult<&mut Box<dyn Notifier>> {
        let Some(name) = explicit.or(self.default_notifier.as_deref()) else {
            warn!("No notifier named and no default notifier set");
            return Err(AppError::configuration(
                "default_notifier",
                "no notifier given and no default notifier set",
            ));
        };

        match self.notifiers.get_mut(name) {
            Some(notifier) => Ok(notifier),
            None => {
                warn!(notifier = %name, "Alert target notifier is not registered");
                Err(AppError::configuration(
                    "notifier",
                    format!("notifier '{}' is not registered", name),
                ))
            }
        }
    }

    // ========================================================================
    // Raising Alerts
    // ========================================================================

    /// Raises one or more alerts of type `kind`.
    ///
    /// # Returns
    /// Configuration error when no notifier can be resolved
    pub fn alert(
        &mut self,
        messages: impl OneOrMany,
        kind: impl Into<String>,
        options: impl Into<AlertOptions>,
    ) -> AppResult<()> {
        let options = options.into();
        let kind = kind.into();
        let messages = messages.into_vec();
        let area = options.area.unwrap_or_else(|| self.default_area.clone());

        let notifier = self.resolve(options.notifier.as_deref())?;
        trace!(
            count = messages.len(),
            kind = %kind,
            area = %area,
            flash = options.flash,
            "Forwarding alerts"
        );
        notifier.alert(
            messages,
            &kind,
            &area,
            options.flash,
            options.extra.as_deref(),
        );
        Ok(())
    }

    pub fn error(
        &mut self,
        messages: impl OneOrMany,
        options: impl Into<AlertOptions>,
    ) -> AppResult<()> {
        self.alert(messages, Severity::Error, options)
    }

    pub fn warning(
        &mut self,
        messages: impl OneOrMany,
        options: impl Into<AlertOptions>,
    ) -> AppResult<()> {
        self.alert(messages, Severity::Warning, options)
    }

    pub fn success(
        &mut self,
        messages: impl OneOrMany,
        options: impl Into<AlertOptions>,
    ) -> AppResult<()> {
        self.alert(messages, Severity::Success, options)
    }

    pub fn info(
        &mut self,
        messages: impl OneOrMany,
        options: impl Into<AlertOptions>,
    ) -> AppResult<()> {
        self.alert(messages, Severity::Info, options)
    }

    /// Raises one error per field of `bag`, keyed by field name, in the
    /// options' area (conventionally `"form"`). `options.extra` is ignored.
    pub fn form_errors<B: ErrorBag + ?Sized>(
        &mut self,
        bag: &B,
        options: impl Into<AlertOptions>,
    ) -> AppResult<()> {
        let options = options.into();
        let area = options.area.unwrap_or_else(|| self.default_area.clone());
        let notifier = self.resolve(options.notifier.as_deref())?;

        for (field, messages) in bag.field_messages() {
            notifier.alert(
                messages,
                Severity::Error.as_str(),
                &area,
                options.flash,
                Some(&field),
            );
        }
        Ok(())
    }

    // ========================================================================
    // Retrieval
    // ========================================================================

    /// Every message of every notifier, in registration order, unfiltered.
    pub fn all(&self) -> Vec<Message> {
        self.notifiers.values().flat_map(|n| n.all()).collect()
    }

    /// Unfiltered retrieval; same as [`Alerts::all`].
    pub fn get(&self) -> Vec<Message> {
        self.all()
    }

    /// Starts an empty filter chain.
    pub fn query(&self) -> AlertQuery<'_> {
        AlertQuery::new(self)
    }

    pub fn where_area(&self, areas: impl OneOrMany) -> AlertQuery<'_> {
        self.query().where_area(areas)
    }

    pub fn where_not_area(&self, areas: impl OneOrMany) -> AlertQuery<'_> {
        self.query().where_not_area(areas)
    }

    pub fn where_type(&self, types: impl OneOrMany) -> AlertQuery<'_> {
        self.query().where_type(types)
    }

    pub fn where_not_type(&self, types: impl OneOrMany) -> AlertQuery<'_> {
        self.query().where_not_type(types)
    }

    /// Every message outside the given area(s).
    pub fn except(&self, areas: impl OneOrMany) -> Vec<Message> {
        self.where_not_area(areas).get()
    }

    /// Text of the first form error registered for `field` by any notifier.
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
        lookup_form_error(&self.all(), field, override_message, default)
    }
}

impl Default for Alerts {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Alerts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alerts")
            .field("notifiers", &self.notifiers.keys().collect::<Vec<_>>())
            .field("default_notifier", &self.default_notifier)
            .field("default_area", &self.default_area)
            .finish()
    }
}
