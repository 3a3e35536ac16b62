use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use campustrade_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let message = err.to_string();
    match err {
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", message),
        DomainError::InvalidCategory { .. } => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invalid_category", message)
        }
        DomainError::Validation(_) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "validation_error", message)
        }
        DomainError::InvalidId(_) => json_error(StatusCode::UNPROCESSABLE_ENTITY, "invalid_id", message),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(
            domain_error_to_response(DomainError::NotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            domain_error_to_response(DomainError::invalid_category("x", &["Livros"])).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            domain_error_to_response(DomainError::validation("bad")).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            domain_error_to_response(DomainError::invalid_id("abc")).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
