use serde::{Deserialize, Serialize};

/// Query parameters for ranked listings.
///
/// # Sort direction
///
/// The `reverse` flag is inverted relative to what the name suggests:
/// `reverse = false` (the default) yields **descending** score order, i.e.
/// highest-scored first, and `reverse = true` yields ascending order. This
/// matches the behavior clients already depend on and must be preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankQuery {
    /// Sort key. Only `"score"` ordering is supported; other values are
    /// accepted and ignored.
    #[serde(default = "default_sort")]
    pub sort: String,
    /// Maximum number of results to return. No offset or pagination.
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// `false` for descending score order, `true` for ascending
    #[serde(default)]
    pub reverse: bool,
}

fn default_sort() -> String {
    "score".to_owned()
}

fn default_limit() -> usize {
    10
}

impl Default for RankQuery {
    fn default() -> Self {
        Self {
            sort: default_sort(),
            limit: default_limit(),
            reverse: false,
        }
    }
}
