use axum::{http::StatusCode, response::IntoResponse, Json};

pub const SERVICE_TITLE: &str = "CampusTrade API";
pub const SERVICE_MESSAGE: &str = "CampusTrade API - Marketplace Universitário";

pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": SERVICE_MESSAGE,
        "title": SERVICE_TITLE,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
