//! REST API endpoint for recording interests.

use crate::error;
use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use recs_core::{models::Interest, ports::Application, service};

/// Creates a router with interest-related endpoints.
pub(crate) fn router<T: Application>() -> Router<T> {
    Router::new().route("/", post(record_interest::<T>))
}

/// Record a single user-to-product interest.
///
/// The referenced product and its category must exist, and at most one
/// interest per `(product, user)` pair can ever be recorded. Under
/// write-time recompute, the affected product and category scores are
/// refreshed before returning.
///
/// # Returns
///
/// - `201 Created`: The stored interest
/// - `400 Bad Request`: An interest for this pair already exists
/// - `404 Not Found`: The product, or its category, does not exist
/// - `500 Internal Server Error`: Database operation failed
async fn record_interest<T: Application>(
    State(app): State<T>,
    Json(interest): Json<Interest>,
) -> Result<(StatusCode, Json<Interest>), (StatusCode, String)> {
    service::record_interest(app.database(), app.recompute_mode(), interest)
        .await
        .map(|stored| (StatusCode::CREATED, Json(stored)))
        .map_err(error::to_response)
}
