use axum::{routing::get, Router};

pub mod products;
pub mod search;
pub mod system;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/search", get(search::search_products))
        .nest("/products", products::router())
}
