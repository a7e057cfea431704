//! Application error type and its HTTP representation.
//!
//! JSON API endpoints answer with
//! `{"error": {"code": ..., "message": ..., "details": ...}}`. The redirect
//! endpoints are scanned straight from a QR code by a phone browser, so their
//! failures are short `text/plain` bodies instead.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::content_kind::UnknownKind;
use crate::domain::schema::SchemaError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload embedded in JSON error responses.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    /// Invalid JSON API input (400, JSON body).
    Validation { message: String, details: Value },
    /// Redirect that cannot be issued (400, plain-text body).
    Redirect { message: String },
    /// Unexpected failure (500, JSON body).
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn redirect(message: impl Into<String>) -> Self {
        Self::Redirect {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation { message, .. } => write!(f, "Validation error: {}", message),
            AppError::Redirect { message } => write!(f, "Redirect error: {}", message),
            AppError::Internal { message, .. } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::Redirect { message } => {
                return (StatusCode::BAD_REQUEST, message).into_response();
            }
            AppError::Internal { message, details } => {
                tracing::error!(%message, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    message,
                    details,
                )
            }
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

impl From<SchemaError> for AppError {
    fn from(e: SchemaError) -> Self {
        let details = match &e {
            SchemaError::UnknownField { kind, key } => json!({ "kind": kind, "field": key }),
            SchemaError::WrongType {
                kind,
                key,
                expected,
            } => json!({ "kind": kind, "field": key, "expected": expected }),
        };
        AppError::bad_request(e.to_string(), details)
    }
}

impl From<UnknownKind> for AppError {
    fn from(e: UnknownKind) -> Self {
        AppError::bad_request(e.to_string(), json!({ "kind": e.0 }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&e).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Request validation failed", details)
    }
}
