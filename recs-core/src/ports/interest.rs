use crate::models::{Category, Interest, ProductScore};

/// Domain-level reasons an interest insert can be refused.
///
/// These are distinct from store errors: the adapter detected them while
/// holding the exclusive write path, and the service layer translates them
/// into the client-facing error taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterestFailure {
    /// An interest for this `(product, user)` pair already exists
    Duplicate,
    /// The referenced product does not exist
    MissingProduct,
    /// The referenced product exists but its category does not
    MissingCategory {
        /// Name of the missing category
        category: String,
    },
}

/// Repository interface for recorded interests and their aggregation.
///
/// Aggregation is a pure group-by-mean over all interest rows joined to the
/// product catalog (for product scores) or joined further to the category
/// table (for category scores). Products and categories with no recorded
/// interests do not appear in the aggregates.
pub trait InterestRepository: super::Repository {
    /// Look up the interest for a `(product, user)` pair, if one exists.
    fn get_interest(
        &self,
        product_id: &str,
        user_id: &str,
    ) -> impl Future<Output = Result<Option<Interest>, Self::Error>> + Send;

    /// Validate and insert a new interest as one atomic unit.
    ///
    /// The duplicate check, the product and category referential checks,
    /// the insert, and (when `refresh_scores` is set) the recomputation of
    /// the affected product and category score caches all execute inside a
    /// single exclusive write transaction. A concurrent catalog replace can
    /// therefore never slip between the checks and the insert.
    ///
    /// # Returns
    ///
    /// - `Ok(Ok(()))` if the interest was recorded
    /// - `Ok(Err(failure))` if a domain invariant refused the write
    /// - `Err(store_error)` if the store itself failed
    fn insert_interest(
        &self,
        interest: &Interest,
        refresh_scores: bool,
    ) -> impl Future<Output = Result<Result<(), InterestFailure>, Self::Error>> + Send;

    /// All interests recorded for the given product.
    fn interests_for_product(
        &self,
        product_id: &str,
    ) -> impl Future<Output = Result<Vec<Interest>, Self::Error>> + Send;

    /// Mean interest score per product, ordered by score.
    ///
    /// With `save` set, the computation and the upsert of the resulting
    /// rows into the score cache happen in one exclusive write transaction;
    /// otherwise the result is a pure in-memory projection.
    ///
    /// `reverse = false` yields descending order (highest first),
    /// `reverse = true` ascending; see [`RankQuery`] for why the flag is
    /// inverted.
    ///
    /// [`RankQuery`]: crate::models::RankQuery
    fn product_score_means(
        &self,
        limit: usize,
        reverse: bool,
        save: bool,
    ) -> impl Future<Output = Result<Vec<ProductScore>, Self::Error>> + Send;

    /// Mean interest score per category (through the product join), ordered
    /// by score. Same `save` and direction semantics as
    /// [`product_score_means`].
    ///
    /// [`product_score_means`]: InterestRepository::product_score_means
    fn category_score_means(
        &self,
        limit: usize,
        reverse: bool,
        save: bool,
    ) -> impl Future<Output = Result<Vec<Category>, Self::Error>> + Send;
}
