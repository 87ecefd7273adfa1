use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Collaborator variants carry a message that is already prefixed with the
/// failing stage, e.g. "Failed to extract features: ...".
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Document parsing error: {0}")]
    DocumentParsing(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Shorthand for a 400 naming the offending request field.
    pub fn missing_field(field: &str) -> Self {
        AppError::Validation(format!("{field} is required"))
    }
}

/// Malformed bodies, wrong field types and a missing JSON content type are all 400s.
/// A body over the route's limit stays a 413.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::PayloadTooLarge(rejection.body_text());
        }
        AppError::Validation(rejection.body_text())
    }
}

/// `axum::Json` whose rejections render through `AppError`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => {
                tracing::debug!("Rejected request: {msg}");
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::PayloadTooLarge(msg) => {
                tracing::debug!("Rejected oversized request: {msg}");
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone())
            }
            AppError::DocumentParsing(msg) => {
                tracing::error!("Document parsing error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "PARSER_ERROR", msg.clone())
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "LLM_ERROR", msg.clone())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    format!("{e:#}"),
                )
            }
        };

        let body = Json(json!({
            "detail": message,
            "code": code,
        }));

        (status, body).into_response()
    }
}
