//! HTTP-facing error type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("A blueprint is already being generated")]
    AlreadyLoading,

    /// Carries the user-visible notice only; the cause is logged upstream.
    #[error("{0}")]
    GenerationFailed(String),

    #[error("Generation was cancelled")]
    Cancelled,

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::AlreadyLoading       => StatusCode::CONFLICT,
            WebError::GenerationFailed(_)  => StatusCode::BAD_GATEWAY,
            WebError::Cancelled            => StatusCode::SERVICE_UNAVAILABLE,
            WebError::Template(_)          => StatusCode::INTERNAL_SERVER_ERROR,
            WebError::Serialization(_)     => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            WebError::Template(e) => {
                tracing::error!(error = %e, "template rendering failed");
                "Internal server error".to_string()
            }
            WebError::Serialization(e) => {
                tracing::error!(error = %e, "response serialization failed");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
