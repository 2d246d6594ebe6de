use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// The only two request-level failures the API distinguishes. Everything else
/// either succeeds or never gets past the extractors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Invalid request format")]
    InvalidFormat,
    #[error("Task not found")]
    NotFound,
}

impl ApiError {
    fn status(self) -> StatusCode {
        match self {
            ApiError::InvalidFormat => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));
        (self.status(), body).into_response()
    }
}
