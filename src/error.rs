//! HTTP-facing error types.
//!
//! [`ApiError`] is the single error surfaced by route handlers. Validation
//! failures become HTTP 400 with a body identifying the failing field;
//! text-generation failures become a bare 500 — the service never retries
//! and never substitutes fallback guidance text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field was missing, empty, or held an invalid value.
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    /// The text-generation collaborator failed.
    #[error("text generation failed: {0}")]
    Generation(#[from] anyhow::Error),
}

impl ApiError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation { field, message } => {
                tracing::debug!(field, %message, "request validation failed");
                let body = serde_json::json!({
                    "error": { "field": field, "message": message }
                });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            Self::Generation(err) => {
                tracing::error!(error = %err, "text generation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let response = ApiError::validation("userId", "is required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn generation_maps_to_500() {
        let response = ApiError::from(anyhow::anyhow!("provider exploded")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
