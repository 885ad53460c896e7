use serde::{Deserialize, Serialize};

/// One user's score for one product; the atomic unit of feedback the
/// system aggregates.
///
/// Interests are keyed by the `(product_id, user_id)` pair, so at most one
/// interest per pair can ever exist. They are created once and never
/// updated or deleted individually; a full catalog replace deletes them
/// all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interest {
    /// The product the user scored
    pub product_id: String,
    /// The user who scored it
    pub user_id: String,
    /// The raw interest score
    pub score: f64,
}
