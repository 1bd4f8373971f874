mod message;

pub(crate) use message::lookup_form_error;
pub use message::{DEFAULT_AREA, Message, Severity};
