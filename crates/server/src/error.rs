use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Unified application error type for the gateway.
#[derive(Debug, Error)]
pub enum AppError {
    /// The upstream credential is not configured; answered immediately,
    /// upstream is never contacted.
    #[error("API key not configured")]
    ConfigMissing,

    /// The local request-rate threshold tripped for this client.
    #[error("Too many requests")]
    TooManyRequests,

    /// Upstream call failed after the retry policy was exhausted.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] tmdb::TmdbError),
}

pub type AppResult<T> = Result<T, AppError>;

/// API error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::ConfigMissing => (
                StatusCode::SERVICE_UNAVAILABLE,
                "API key not configured".to_string(),
                Some("Please configure TMDB_API_KEY in your environment".to_string()),
            ),
            AppError::TooManyRequests => (
                StatusCode::TOO_MANY_REQUESTS,
                "Too many requests from this IP, please try again later.".to_string(),
                None,
            ),
            AppError::Upstream(e) => {
                tracing::error!("Upstream request failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to reach the movie database".to_string(),
                    Some(e.to_string()),
                )
            }
        };

        (status, Json(ErrorResponse { error, message })).into_response()
    }
}
