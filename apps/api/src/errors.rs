use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::auth::AuthError;
use crate::llm_client::LlmError;

/// Application-level error type for the catalog and history routes.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Auth service error: {0}")]
    Auth(#[from] AuthError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
            ),
            AppError::Auth(e) => {
                tracing::error!("Auth service error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "AUTH_SERVICE_ERROR",
                    "The authentication service is unavailable".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

/// Failures of the roadmap generation function.
///
/// Every kind is terminal and answers 500 with `{ "error": "<message>" }`.
/// Malformed model output and history write failures never reach this type.
#[derive(Debug, Error)]
pub enum RoadmapError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    #[error("Auth service error: {0}")]
    Auth(#[from] AuthError),

    #[error("Failed to load catalog: {0}")]
    Catalog(anyhow::Error),

    /// Provider call failed; carries the provider's message.
    #[error("Gemini API error: {0}")]
    Upstream(String),

    #[error("No response from Gemini API")]
    EmptyGeneration,

    #[error("{0}")]
    Internal(String),
}

impl From<LlmError> for RoadmapError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Api { message, .. } => RoadmapError::Upstream(message),
            LlmError::EmptyContent => RoadmapError::EmptyGeneration,
            LlmError::Http(e) => RoadmapError::Upstream(e.to_string()),
        }
    }
}

impl IntoResponse for RoadmapError {
    fn into_response(self) -> Response {
        match &self {
            RoadmapError::Unauthorized | RoadmapError::InvalidRequest(_) => {
                tracing::warn!("Roadmap request rejected: {self}")
            }
            _ => tracing::error!("Error in generate-career-roadmap: {self}"),
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
