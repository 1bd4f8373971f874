//! Alert aggregation with pluggable notifier backends.
//!
//! The core trait `Notifier` lets the aggregator work against any storage
//! backend (session flash, view data, plain memory). `Alerts` collects the
//! messages of every registered notifier and `AlertQuery` filters them by
//! area and type.

mod alert_service;
mod flash_provider;
mod memory_provider;
mod provider;
mod query;

pub use alert_service::{AlertOptions, Alerts};
pub use flash_provider::FlashNotifier;
pub use memory_provider::MemoryNotifier;
pub use provider::Notifier;
pub use query::AlertQuery;
