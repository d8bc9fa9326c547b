use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::evaluator::EvaluationFailure;
use crate::extract::ExtractError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every error body is `{"detail": "<message>"}`. Underlying failure detail
/// for 5xx responses is logged server-side, never returned to the client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Evaluation error: {0}")]
    Evaluation(EvaluationFailure),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Extraction(e) => {
                tracing::error!("Extraction error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Could not extract readable text from the PDF.".to_string(),
                )
            }
            AppError::Evaluation(failure) => {
                tracing::error!("Evaluation error: {}", failure.detail);
                (StatusCode::INTERNAL_SERVER_ERROR, failure.message.clone())
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "detail": detail }));

        (status, body).into_response()
    }
}
