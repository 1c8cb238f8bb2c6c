use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    AlreadySpun(String),
    Unauthorized,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // The wheel reads `message` from conflict bodies.
            ApiError::AlreadySpun(message) => {
                (StatusCode::CONFLICT, Json(json!({ "message": message }))).into_response()
            }
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Invalid admin secret" })),
            )
                .into_response(),
        }
    }
}
