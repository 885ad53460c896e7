//! REST API endpoint for listing users.

use crate::error;
use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use recs_core::{
    models::User,
    ports::{Application, UserRepository as _},
};

/// Creates a router with user-related endpoints.
pub(crate) fn router<T: Application>() -> Router<T> {
    Router::new().route("/", get(list_users::<T>))
}

/// List all users.
///
/// # Returns
///
/// - `200 OK`: All users, in id order
/// - `500 Internal Server Error`: Database query failed
async fn list_users<T: Application>(
    State(app): State<T>,
) -> Result<Json<Vec<User>>, (StatusCode, String)> {
    app.database()
        .all_users()
        .await
        .map(Json)
        .map_err(error::store_failure)
}
