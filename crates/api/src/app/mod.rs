//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: catalog operations shared by the handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use campustrade_infra::CatalogStore;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The catalog is injected so tests can run against a fresh store.
pub fn build_app(catalog: Arc<dyn CatalogStore>) -> Router {
    let services = Arc::new(services::AppServices::new(catalog));

    Router::new()
        .route("/", get(routes::system::root))
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(services)),
        )
}
