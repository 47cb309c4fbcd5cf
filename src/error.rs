//! Application error types and their HTTP representation.
//!
//! Every failure the service can produce is one of the closed set of
//! [`AppError`] variants, so callers match on kinds instead of inspecting
//! message strings. Absence (unknown or deleted code) is modeled as
//! `Option`/`bool` in the service API; [`AppError::NotFound`] exists for the
//! HTTP layer to surface it.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Target fails URL parsing or has a scheme other than http/https.
    #[error("invalid target URL: {reason}")]
    InvalidTarget { reason: String },

    /// Caller-supplied code does not match the code format contract.
    #[error("code must be 6-8 alphanumeric characters")]
    InvalidCode { code: String },

    /// Request body failed DTO validation.
    #[error("request validation failed")]
    Validation(#[from] validator::ValidationErrors),

    /// Caller-supplied code already exists. Never retried; the caller chose
    /// the code and must choose another.
    #[error("code {code:?} already exists")]
    CodeConflict { code: String },

    /// Generated-code collisions exhausted the retry budget.
    #[error("could not generate a unique code after {attempts} attempts")]
    CodeGenerationExhausted { attempts: u32 },

    /// No active link matches the requested code.
    #[error("not found")]
    NotFound,

    /// Any database failure other than a code-uniqueness violation.
    /// Propagated unchanged; never retried.
    #[error("database error")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let (status, code, details) = match &self {
            AppError::InvalidTarget { reason } => (
                StatusCode::BAD_REQUEST,
                "invalid_target",
                json!({ "reason": reason }),
            ),
            AppError::InvalidCode { code } => (
                StatusCode::BAD_REQUEST,
                "invalid_code",
                json!({ "code": code }),
            ),
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, "validation_error", json!(errors))
            }
            AppError::CodeConflict { code } => {
                (StatusCode::CONFLICT, "conflict", json!({ "code": code }))
            }
            AppError::CodeGenerationExhausted { attempts } => (
                StatusCode::CONFLICT,
                "conflict",
                json!({ "attempts": attempts }),
            ),
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found", json!({})),
            // Internal detail stays out of the response body.
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", json!({})),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}
