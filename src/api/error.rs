use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid subnet: {0}")]
    InvalidSubnet(String),

    #[error("Metrics error: {0}")]
    Metrics(#[from] crate::metrics::MetricsError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message, error_code) = match self {
            ApiError::InvalidRequest(e) => (StatusCode::BAD_REQUEST, e, "INVALID_REQUEST"),
            ApiError::InvalidSubnet(e) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid subnet: {e}"),
                "INVALID_SUBNET",
            ),
            ApiError::Metrics(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                e.to_string(),
                "METRICS_ERROR",
            ),
        };

        let body = Json(json!({
            "error": error_message,
            "code": error_code,
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
