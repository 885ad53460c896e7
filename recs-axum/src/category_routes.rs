//! REST API endpoints for categories and category rankings.

use crate::error;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use recs_core::{
    models::{Category, RankQuery},
    ports::{Application, CategoryRepository as _},
    service,
};

/// Path parameter for category-specific endpoints.
#[derive(serde::Deserialize)]
struct Id {
    /// The unique name of the category
    category: String,
}

/// Creates a router with category-related endpoints.
pub(crate) fn router<T: Application>() -> Router<T> {
    Router::new()
        .route("/", get(list_categories::<T>).post(create_category::<T>))
        .route("/{category}", get(get_category::<T>))
}

/// List categories ranked by mean interest score.
///
/// Same recompute and direction semantics as the product ranking:
/// `reverse=false` (the default) is descending.
///
/// # Returns
///
/// - `200 OK`: Ranked categories with their scores
/// - `500 Internal Server Error`: Database query failed or broken invariant
async fn list_categories<T: Application>(
    State(app): State<T>,
    Query(query): Query<RankQuery>,
) -> Result<Json<Vec<Category>>, (StatusCode, String)> {
    service::rank_categories(app.database(), &query, app.recompute_mode())
        .await
        .map(Json)
        .map_err(error::to_response)
}

/// Retrieve a single category.
///
/// # Returns
///
/// - `200 OK`: The category (score may be null if never computed)
/// - `404 Not Found`: Category does not exist
/// - `500 Internal Server Error`: Database query failed
async fn get_category<T: Application>(
    State(app): State<T>,
    Path(Id { category }): Path<Id>,
) -> Result<Json<Category>, (StatusCode, String)> {
    service::find_category_or_fail(app.database(), &category)
        .await
        .map(Json)
        .map_err(error::to_response)
}

/// Create a category with no score.
///
/// # Request Body
///
/// The category name as a JSON string.
///
/// # Returns
///
/// - `201 Created`: The stored category
/// - `500 Internal Server Error`: Database operation failed
async fn create_category<T: Application>(
    State(app): State<T>,
    Json(name): Json<String>,
) -> Result<(StatusCode, Json<Category>), (StatusCode, String)> {
    let category = app
        .database()
        .save_category(Category {
            category: name,
            score: None,
        })
        .await
        .map_err(error::store_failure)?;

    Ok((StatusCode::CREATED, Json(category)))
}
