//! HTTP API application wiring (Axum router + service wiring).
//!
//! Folder layout:
//! - `services.rs`: shared state (the in-memory catalog behind a lock)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and validation mapping
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Each call owns a fresh seeded catalog, so tests get isolated state by
/// building their own app.
pub fn build_app() -> Router {
    build_app_with(Arc::new(services::AppServices::seeded()))
}

/// Build the router around explicitly provided services.
pub fn build_app_with(services: Arc<services::AppServices>) -> Router {
    routes::router().layer(ServiceBuilder::new().layer(Extension(services)))
}
