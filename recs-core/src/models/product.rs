use serde::{Deserialize, Serialize};

/// A catalog entry.
///
/// Products are immutable once created; the only way to change one is a
/// full catalog replace. The `category` field references a [`Category`] by
/// name -- the reference is checked by the service layer at write time, not
/// by the store.
///
/// [`Category`]: super::Category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for the product
    pub product_id: String,
    /// Human-readable product name
    pub name: String,
    /// Name of the category this product belongs to
    pub category: String,
}

/// A product paired with its current mean interest score.
///
/// Assembled on the fly for ranked responses; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductWithScore {
    /// The catalog entry
    pub product: Product,
    /// Mean of all interest scores recorded for the product
    pub score: f64,
}
