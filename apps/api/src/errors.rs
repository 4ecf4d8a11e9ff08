use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::presentation::session::SessionError;
use crate::solon::interpreter::InterpretError;

/// The only message clients ever see for a failed synchronization.
/// Network failures and unreadable replies are indistinguishable from outside.
pub const SYNC_FAILED_MESSAGE: &str =
    "No pude sincronizar los patrones del mercado en este momento. Inténtalo de nuevo.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Pattern synchronization failed: {0}")]
    PatternSync(#[from] InterpretError),
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        AppError::Conflict(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SYNC_FAILED",
                    SYNC_FAILED_MESSAGE.to_string(),
                )
            }
            AppError::PatternSync(e) => {
                tracing::error!("Could not interpret model reply: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SYNC_FAILED",
                    SYNC_FAILED_MESSAGE.to_string(),
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
