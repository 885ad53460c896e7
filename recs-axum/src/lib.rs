#![warn(missing_docs)]
//! REST API for the product interest ranking service.
//!
//! The routers in this crate are generic over the [`Application`] port, so
//! any state carrying a repository implementation can serve the API. Route
//! handlers translate the core error taxonomy into HTTP status codes:
//! not-found lookups become 404s, duplicate interests 400s, and integrity
//! violations or store failures 500s (logged at ERROR).

mod category_routes;
mod error;
mod interest_routes;
mod product_routes;
mod user_routes;

pub mod config;
use config::HttpConfig;

use axum::{Json, Router, routing::get};
use recs_core::ports::Application;
use serde::Serialize;
use tower_http::cors::CorsLayer;

/// Response for the health check endpoint
#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

/// Simple health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Construct the full API router with the given state
pub fn router<T: Application>(state: T) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/products", product_routes::router())
        .nest("/categories", category_routes::router())
        .nest("/interest", interest_routes::router())
        .nest("/users", user_routes::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Starts the HTTP server with the provided configuration
pub async fn start_server<T: Application>(
    config: HttpConfig,
    app: T,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!(
        "listening for requests on {}",
        listener.local_addr()?
    );

    axum::serve(listener, router(app)).await
}
