use axum::{response::IntoResponse, Json};

use crate::app::dto;

pub async fn list_categories() -> impl IntoResponse {
    Json(dto::categories_to_json())
}
