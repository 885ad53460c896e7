mod category;
mod interest;
mod product;
mod user;

use crate::Db;
use recs_core::ports::Repository;

impl Repository for Db {
    type Error = sqlx::Error;
}

/// Order-by fragment for the inverted direction convention:
/// `reverse = false` means descending score order.
pub(crate) fn score_order(reverse: bool) -> &'static str {
    if reverse { "asc" } else { "desc" }
}

/// Bindable row limit. Saturates rather than wrapping negative, since a
/// negative limit means "unbounded" to SQLite.
pub(crate) fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}
