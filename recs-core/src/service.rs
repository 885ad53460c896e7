use crate::models::{Category, Interest, Product, ProductWithScore, RankQuery, RecomputeMode};
use crate::ports::{CategoryRepository, InterestFailure, InterestRepository, ProductRepository};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Failures produced by the core operations.
///
/// Client-input failures ([`NotFound`], [`DuplicateInterest`]) are detected
/// close to their source and propagated up unmasked; the boundary layer
/// translates them into caller-visible responses. [`IntegrityViolation`]
/// indicates a broken internal invariant rather than a user error and
/// should be logged distinctly. Store failures pass through unmodified.
///
/// [`NotFound`]: ServiceError::NotFound
/// [`DuplicateInterest`]: ServiceError::DuplicateInterest
/// [`IntegrityViolation`]: ServiceError::IntegrityViolation
#[derive(Debug, Error)]
pub enum ServiceError<E: std::error::Error + Send + Sync + 'static> {
    /// A lookup by id found nothing
    #[error("{entity}: id [{id}] doesn't exist")]
    NotFound {
        /// Kind of entity that was looked up
        entity: &'static str,
        /// The id that found nothing
        id: String,
    },

    /// A write would violate the one-interest-per-(product, user) invariant
    #[error("interest already exists for user {user_id} and product {product_id}")]
    DuplicateInterest {
        /// Product of the conflicting interest
        product_id: String,
        /// User of the conflicting interest
        user_id: String,
    },

    /// A score row references an entity missing from the store. This should
    /// not occur if the invariants hold; it indicates a bug or a
    /// concurrent-mutation race.
    #[error("score row references missing {entity} [{id}]")]
    IntegrityViolation {
        /// Kind of entity the score row references
        entity: &'static str,
        /// The dangling id
        id: String,
    },

    /// The underlying store failed; propagated unmodified, no retry
    #[error(transparent)]
    Store(#[from] E),
}

/// Rank products by mean interest score.
///
/// Under [`RecomputeMode::OnRead`] the scores are recomputed from the
/// recorded interests and upserted into the score cache in the same write
/// transaction;
/// under [`RecomputeMode::OnWrite`] the cache (kept fresh by
/// [`record_interest`]) is served directly. Either way, the full product
/// records are fetched for exactly the ids present in the score rows and
/// joined by key, preserving the score ordering.
///
/// Recall the inverted direction flag: `query.reverse = false` means
/// descending score order. See [`RankQuery`].
pub async fn rank_products<R>(
    db: &R,
    query: &RankQuery,
    mode: RecomputeMode,
) -> Result<Vec<ProductWithScore>, ServiceError<R::Error>>
where
    R: ProductRepository + InterestRepository + Sync,
{
    let scores = match mode {
        RecomputeMode::OnRead => {
            db.product_score_means(query.limit, query.reverse, true)
                .await?
        }
        RecomputeMode::OnWrite => db.cached_product_scores(query.limit, query.reverse).await?,
    };

    let ids: Vec<String> = scores.iter().map(|s| s.product_id.clone()).collect();
    let mut products: FxHashMap<String, Product> = db
        .get_products(&ids)
        .await?
        .into_iter()
        .map(|p| (p.product_id.clone(), p))
        .collect();

    // Score order is authoritative; a score row with no matching product is
    // a broken invariant, not something to silently drop.
    scores
        .into_iter()
        .map(|row| match products.remove(&row.product_id) {
            Some(product) => Ok(ProductWithScore {
                product,
                score: row.score,
            }),
            None => Err(ServiceError::IntegrityViolation {
                entity: "product",
                id: row.product_id,
            }),
        })
        .collect()
}

/// Rank categories by mean interest score.
///
/// Same recompute/cache behavior and direction convention as
/// [`rank_products`]. The returned categories carry their computed score.
pub async fn rank_categories<R>(
    db: &R,
    query: &RankQuery,
    mode: RecomputeMode,
) -> Result<Vec<Category>, ServiceError<R::Error>>
where
    R: CategoryRepository + InterestRepository + Sync,
{
    let scored = match mode {
        RecomputeMode::OnRead => {
            db.category_score_means(query.limit, query.reverse, true)
                .await?
        }
        RecomputeMode::OnWrite => db.cached_category_scores(query.limit, query.reverse).await?,
    };

    let names: Vec<String> = scored.iter().map(|c| c.category.clone()).collect();
    let mut known: FxHashMap<String, Category> = db
        .get_categories(&names)
        .await?
        .into_iter()
        .map(|c| (c.category.clone(), c))
        .collect();

    scored
        .into_iter()
        .map(|row| match known.remove(&row.category) {
            Some(mut category) => {
                category.score = row.score;
                Ok(category)
            }
            None => Err(ServiceError::IntegrityViolation {
                entity: "category",
                id: row.category,
            }),
        })
        .collect()
}

/// Record a single user-to-product interest.
///
/// Fails with [`ServiceError::DuplicateInterest`] if an interest for the
/// `(product, user)` pair already exists -- no overwrite, no silent merge.
/// Fails with [`ServiceError::NotFound`] if the referenced product or,
/// transitively, its category is absent. The checks, the insert, and --
/// under [`RecomputeMode::OnWrite`] -- the refresh of the affected product
/// and category score caches are one atomic unit in the adapter, so a
/// concurrent catalog replace cannot interleave with them.
pub async fn record_interest<R>(
    db: &R,
    mode: RecomputeMode,
    interest: Interest,
) -> Result<Interest, ServiceError<R::Error>>
where
    R: InterestRepository + Sync,
{
    let refresh_scores = mode == RecomputeMode::OnWrite;
    db.insert_interest(&interest, refresh_scores)
        .await?
        .map_err(|failure| match failure {
            InterestFailure::Duplicate => ServiceError::DuplicateInterest {
                product_id: interest.product_id.clone(),
                user_id: interest.user_id.clone(),
            },
            InterestFailure::MissingProduct => ServiceError::NotFound {
                entity: "product",
                id: interest.product_id.clone(),
            },
            InterestFailure::MissingCategory { category } => ServiceError::NotFound {
                entity: "category",
                id: category,
            },
        })?;

    Ok(interest)
}

/// Replace the full product catalog, cascading the invalidation of
/// categories, interests, and cached scores. See
/// [`ProductRepository::replace_catalog`] for the exact sequence; the
/// adapter performs it as a single atomic unit.
pub async fn replace_catalog<R>(
    db: &R,
    products: Vec<Product>,
) -> Result<Vec<Product>, ServiceError<R::Error>>
where
    R: ProductRepository + Sync,
{
    Ok(db.replace_catalog(products).await?)
}

/// Look up a product, failing with [`ServiceError::NotFound`] if absent.
/// Never returns a silent null past the service boundary.
pub async fn find_product_or_fail<R>(
    db: &R,
    product_id: &str,
) -> Result<Product, ServiceError<R::Error>>
where
    R: ProductRepository + Sync,
{
    db.get_product(product_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound {
            entity: "product",
            id: product_id.to_owned(),
        })
}

/// Look up a category, failing with [`ServiceError::NotFound`] if absent.
pub async fn find_category_or_fail<R>(
    db: &R,
    name: &str,
) -> Result<Category, ServiceError<R::Error>>
where
    R: CategoryRepository + Sync,
{
    db.get_category(name)
        .await?
        .ok_or_else(|| ServiceError::NotFound {
            entity: "category",
            id: name.to_owned(),
        })
}
