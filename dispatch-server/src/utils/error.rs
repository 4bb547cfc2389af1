//! Unified error handling
//!
//! Provides the application error type and response envelope:
//! - [`AppError`] - application error enum
//! - [`AppResponse`] - API response structure
//!
//! # Error code scheme
//!
//! | Prefix | Category | Example |
//! |--------|----------|---------|
//! | E0xxx  | Business errors | E0003 resource not found |
//! | E8xxx  | Upstream errors | E8001 extraction failed |
//! | E9xxx  | System errors | E9002 database error |
//!
//! # Usage
//!
//! ```ignore
//! Err(AppError::NotFound("Order not found".into()))
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Unified API response envelope
///
/// ```json
/// {
///   "code": "E0000",
///   "message": "Success",
///   "data": { ... }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AppResponse<T> {
    /// Error code (E0000 means success)
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Response payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    /// Resource does not exist (404)
    NotFound(String),

    #[error("Resource conflict: {0}")]
    /// Duplicate or conflicting request (409)
    Conflict(String),

    #[error("Validation failed: {0}")]
    /// Bad input (400)
    Validation(String),

    #[error("Business rule violation: {0}")]
    /// State machine or quantity rule violated (422)
    BusinessRule(String),

    #[error("Extraction failed: {0}")]
    /// Upstream text-extraction collaborator failed (502)
    Extraction(String),

    #[error("Database error: {0}")]
    /// Storage failure (500)
    Database(String),

    #[error("Internal server error: {0}")]
    /// Anything else (500)
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg.as_str()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "E0004", msg.as_str()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg.as_str()),
            AppError::BusinessRule(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "E0005", msg.as_str())
            }

            AppError::Extraction(msg) => {
                error!(target: "extraction", error = %msg, "Extraction request failed");
                (StatusCode::BAD_GATEWAY, "E8001", "Extraction failed")
            }

            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "E9002", "Database error")
            }

            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9001",
                    "Internal server error",
                )
            }
        };

        let body = Json(AppResponse::<()> {
            code: code.to_string(),
            message: message.to_string(),
            data: None,
        });

        (status, body).into_response()
    }
}

impl From<crate::orders::ManagerError> for AppError {
    fn from(e: crate::orders::ManagerError) -> Self {
        match e {
            crate::orders::ManagerError::Storage(e) => AppError::Database(e.to_string()),
            crate::orders::ManagerError::Duplicate(id) => {
                AppError::Conflict(format!("Command already processed: {}", id))
            }
            crate::orders::ManagerError::Order(e) => AppError::BusinessRule(e.to_string()),
        }
    }
}

impl From<crate::orders::StorageError> for AppError {
    fn from(e: crate::orders::StorageError) -> Self {
        AppError::Database(e.to_string())
    }
}
