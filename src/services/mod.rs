//! Service layer for alert operations.

pub mod notifications;

pub use notifications::{AlertOptions, AlertQuery, Alerts, FlashNotifier, MemoryNotifier, Notifier};
