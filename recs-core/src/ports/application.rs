use super::{CategoryRepository, InterestRepository, ProductRepository, UserRepository};
use crate::models::RecomputeMode;

/// The application glue port: holds the repository and process-wide policy.
///
/// Implementations of this trait are the state handed to the HTTP layer,
/// hence the `Clone + Send + Sync + 'static` bounds.
pub trait Application: Clone + Send + Sync + 'static {
    /// The persistence adapter used by this application
    type Repository: ProductRepository
        + CategoryRepository
        + UserRepository
        + InterestRepository
        + Clone
        + Send
        + Sync
        + 'static;

    /// Access the repository
    fn database(&self) -> &Self::Repository;

    /// When score recomputation happens (read path or write path)
    fn recompute_mode(&self) -> RecomputeMode;
}
