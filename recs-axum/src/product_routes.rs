//! REST API endpoints for the product catalog and product rankings.

use crate::error;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use recs_core::{
    models::{Product, ProductWithScore, RankQuery},
    ports::Application,
    service,
};

/// Path parameter for product-specific endpoints.
#[derive(serde::Deserialize)]
struct Id {
    /// The unique identifier of the product
    product_id: String,
}

/// Creates a router with product-related endpoints.
pub(crate) fn router<T: Application>() -> Router<T> {
    Router::new()
        .route("/", get(list_products::<T>).put(replace_catalog::<T>))
        .route("/{product_id}", get(get_product::<T>))
}

/// List products ranked by mean interest score.
///
/// Depending on the configured recompute mode, this either recomputes the
/// aggregates from the recorded interests (persisting them as a side
/// effect) or serves the score cache. Note the inverted direction flag:
/// `reverse=false` (the default) is descending.
///
/// # Returns
///
/// - `200 OK`: Ranked products with their scores
/// - `500 Internal Server Error`: Database query failed or broken invariant
async fn list_products<T: Application>(
    State(app): State<T>,
    Query(query): Query<RankQuery>,
) -> Result<Json<Vec<ProductWithScore>>, (StatusCode, String)> {
    service::rank_products(app.database(), &query, app.recompute_mode())
        .await
        .map(Json)
        .map_err(error::to_response)
}

/// Retrieve a single product.
///
/// # Returns
///
/// - `200 OK`: The product
/// - `404 Not Found`: Product does not exist
/// - `500 Internal Server Error`: Database query failed
async fn get_product<T: Application>(
    State(app): State<T>,
    Path(Id { product_id }): Path<Id>,
) -> Result<Json<Product>, (StatusCode, String)> {
    service::find_product_or_fail(app.database(), &product_id)
        .await
        .map(Json)
        .map_err(error::to_response)
}

/// Replace the entire product catalog.
///
/// Cascades the invalidation of all categories, interests, and cached
/// scores; the whole sequence is atomic with respect to concurrent
/// readers.
///
/// # Returns
///
/// - `200 OK`: The stored product list
/// - `500 Internal Server Error`: Database operation failed
async fn replace_catalog<T: Application>(
    State(app): State<T>,
    Json(products): Json<Vec<Product>>,
) -> Result<Json<Vec<Product>>, (StatusCode, String)> {
    service::replace_catalog(app.database(), products)
        .await
        .map(Json)
        .map_err(error::to_response)
}
