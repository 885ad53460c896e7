mod application;
mod category;
mod interest;
mod product;
mod user;

pub use application::Application;
pub use category::CategoryRepository;
pub use interest::{InterestFailure, InterestRepository};
pub use product::ProductRepository;
pub use user::UserRepository;

/// Base trait for persistence adapters.
///
/// Associates the adapter's error type. Store-level failures propagate
/// through this type unmodified; the service layer wraps them without
/// masking and applies no retry policy.
pub trait Repository {
    /// Error type produced by the underlying store
    type Error: std::error::Error + Send + Sync + 'static;
}
