use serde::{Deserialize, Serialize};

/// Cached mean interest score for a product.
///
/// Recomputed as the arithmetic mean of all [`Interest`] scores for the
/// product. Like [`Category::score`], this is a cache: staleness between
/// recompute events is acceptable, permanent divergence is not.
///
/// [`Interest`]: super::Interest
/// [`Category::score`]: super::Category::score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductScore {
    /// The product this score belongs to
    pub product_id: String,
    /// Mean of all interest scores recorded for the product
    pub score: f64,
}
