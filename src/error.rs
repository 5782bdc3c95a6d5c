//! HTTP-facing error type.
//!
//! Every JSON error response has the shape
//! `{"error": {"code": "...", "message": "...", "details": {...}}}`.

use crate::application::services::catalog_service::LOAD_FAILED_MESSAGE;
use crate::domain::table::FetchError;
use crate::infrastructure::storage::StorageError;
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

/// Error payload embedded in JSON error responses.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Unprocessable { message: String, details: Value },
    Unavailable { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn unprocessable(message: impl Into<String>, details: Value) -> Self {
        Self::Unprocessable {
            message: message.into(),
            details,
        }
    }
    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Status code and machine-readable code for this error.
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Unprocessable { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "invalid_cart_operation")
            }
            AppError::Unavailable { .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, "catalog_unavailable")
            }
            AppError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (Self::Validation { message, .. }
        | Self::NotFound { message, .. }
        | Self::Unprocessable { message, .. }
        | Self::Unavailable { message, .. }
        | Self::Internal { message, .. }) = self;
        f.write_str(message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();
        let (Self::Validation { message, details }
        | Self::NotFound { message, details }
        | Self::Unprocessable { message, details }
        | Self::Unavailable { message, details }
        | Self::Internal { message, details }) = self;

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

impl From<FetchError> for AppError {
    fn from(e: FetchError) -> Self {
        AppError::unavailable(LOAD_FAILED_MESSAGE, json!({ "reason": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Validation failed",
            serde_json::to_value(&e).unwrap_or_default(),
        )
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        tracing::error!("Cart storage error: {}", e);
        AppError::internal("Cart storage error", json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::unprocessable("x", json!({})).status(),
            (StatusCode::UNPROCESSABLE_ENTITY, "invalid_cart_operation")
        );
        assert_eq!(
            AppError::unavailable("x", json!({})).status().0,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_fetch_error_maps_to_unavailable() {
        let err: AppError = FetchError::Format("no rows".to_string()).into();
        assert!(matches!(err, AppError::Unavailable { .. }));
        assert_eq!(err.to_string(), "Failed to load data. Please refresh...");
    }
}
