//! Alerts-RS Library
//!
//! Collects user-facing alert messages through named notifiers and
//! retrieves them filtered by area and type.
//!
//! ```no_run
//! use alerts_rs::{AlertOptions, Alerts, MemoryNotifier};
//!
//! let mut alerts = Alerts::new();
//! alerts.add_notifier("view", MemoryNotifier::new());
//! alerts.set_default_notifier("view");
//!
//! alerts.error("Invalid credentials.", "header")?;
//! alerts.success(["Saved.", "Synced."], AlertOptions::new().area("footer"))?;
//!
//! let header = alerts.where_area("header").get();
//! assert_eq!(header.len(), 1);
//! # Ok::<(), alerts_rs::AppError>(())
//! ```

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{AppError, AppResult};
pub use models::{DEFAULT_AREA, Message, Severity};
pub use services::notifications::{
    AlertOptions, AlertQuery, Alerts, FlashNotifier, MemoryNotifier, Notifier,
};
pub use utils::{ErrorBag, OneOrMany};
