use serde::{Deserialize, Serialize};

/// A product category.
///
/// The `score` is a cached aggregate (mean of all interests for products in
/// the category), never authoritative data: it may be stale between
/// recompute events but is always derivable by replaying the interests.
/// Newly created categories carry no score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique name of the category
    pub category: String,
    /// Cached mean interest score, if one has been computed
    pub score: Option<f64>,
}
