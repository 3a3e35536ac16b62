use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use campustrade_core::{DomainError, ProductId};

use crate::app::dto::{self, ProductRequest, SearchQuery};
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/buscar", get(search_products))
        .route("/estatisticas", get(product_stats))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

fn parse_id(raw: &str) -> Result<ProductId, axum::response::Response> {
    raw.parse::<ProductId>()
        .map_err(errors::domain_error_to_response)
}

fn rejected(body_text: String) -> axum::response::Response {
    errors::json_error(StatusCode::UNPROCESSABLE_ENTITY, "validation_error", body_text)
}

fn respond<T: serde::Serialize>(result: Result<T, DomainError>) -> axum::response::Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.products_list())).into_response()
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(v) => v,
        Err(rejection) => return rejected(rejection.body_text()),
    };
    respond(services.products_create(body))
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    respond(services.products_get(id))
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> axum::response::Response {
    // Malformed bodies are rejected before the id is looked up.
    let Json(body) = match body {
        Ok(v) => v,
        Err(rejection) => return rejected(rejection.body_text()),
    };
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    respond(services.products_update(id, body))
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.products_delete(id) {
        Ok(_) => (
            StatusCode::OK,
            Json(dto::message_json("Produto removido com sucesso")),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn search_products(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(v) => v,
        Err(rejection) => return rejected(rejection.body_text()),
    };
    respond(services.products_search(&query))
}

pub async fn product_stats(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let stats = services.products_stats();
    (StatusCode::OK, Json(dto::stats_to_json(&stats))).into_response()
}
