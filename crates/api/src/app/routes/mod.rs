use axum::{routing::get, Router};

pub mod categories;
pub mod products;
pub mod system;

/// Router for the catalog endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/categorias", get(categories::list_categories))
        .nest("/produtos", products::router())
}
