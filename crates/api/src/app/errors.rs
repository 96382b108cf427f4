use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use vendorhub_infra::HandlerError;

pub fn handler_error_to_response(err: HandlerError) -> axum::response::Response {
    match err {
        HandlerError::NotFound(id) => json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("vendor {id} not found"),
        ),
        HandlerError::Store(e) => {
            tracing::error!(error = %e, "vendor store failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
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
