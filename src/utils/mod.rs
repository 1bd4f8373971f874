mod error_bag;
mod one_or_many;

pub use error_bag::ErrorBag;
pub use one_or_many::OneOrMany;
