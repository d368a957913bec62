use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use crate::routing::ResolveError;

pub fn resolve_error_to_response(err: ResolveError) -> axum::response::Response {
    match err {
        ResolveError::Unavailable => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "route_unavailable",
            err.to_string(),
        ),
        ResolveError::MissingParam(_) | ResolveError::InvalidClientId(_) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_route", err.to_string())
        }
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
