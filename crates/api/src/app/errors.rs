use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use adopta_core::DomainError;

use crate::source::SourceError;

pub fn source_error_to_response(err: SourceError) -> axum::response::Response {
    match err {
        SourceError::Domain(e) => domain_error_to_response(e),
        e @ SourceError::Unavailable => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            e.to_string(),
        ),
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
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
    fn maps_domain_errors_to_status_codes() {
        let cases = [
            (DomainError::validation("x"), StatusCode::BAD_REQUEST),
            (DomainError::invalid_id("x"), StatusCode::BAD_REQUEST),
            (DomainError::not_found(), StatusCode::NOT_FOUND),
            (DomainError::conflict("x"), StatusCode::CONFLICT),
        ];

        for (err, status) in cases {
            assert_eq!(domain_error_to_response(err).status(), status);
        }
    }

    #[test]
    fn unavailable_catalog_is_a_server_error() {
        let res = source_error_to_response(SourceError::Unavailable);
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let res = source_error_to_response(SourceError::Domain(DomainError::validation("x")));
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
