// src/application/error_handling.rs
//
// Error Handling for HTTP handlers
//
// ARCHITECTURE:
// - Maps internal errors → status code + JSON body
// - Provides consistent error format for clients
// - Never exposes internal implementation details
// - Logs server-side failures for diagnosis

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found (404)
    NotFound,

    /// Invalid input (400)
    Validation,

    /// Domain invariant violation (400)
    DomainError,

    /// Upload over the configured body limit (413)
    PayloadTooLarge,

    /// Database/persistence error (500)
    Database,

    /// File system / storage error (500)
    FileSystem,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorType {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorType::NotFound => StatusCode::NOT_FOUND,
            ErrorType::Validation | ErrorType::DomainError => StatusCode::BAD_REQUEST,
            ErrorType::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ErrorType::Database | ErrorType::FileSystem | ErrorType::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        if error.is_client_error() {
            tracing::debug!(error = %error, "Request rejected");
        } else {
            tracing::error!(error = ?error, "Request failed");
        }

        match error {
            AppError::NotFound(resource) => Self::not_found(&resource),

            AppError::Validation(message) => Self::validation(message),

            AppError::PayloadTooLarge(message) => Self {
                success: false,
                error_type: ErrorType::PayloadTooLarge,
                message,
                details: None,
            },

            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::DomainError,
                message: "Domain validation failed".to_string(),
                details: Some(domain_error.to_string()),
            },

            AppError::Database(_) | AppError::Pool(_) => Self {
                success: false,
                error_type: ErrorType::Database,
                message: "Database operation failed".to_string(),
                details: Some("Check logs for details".to_string()),
            },

            AppError::Io(_) => Self {
                success: false,
                error_type: ErrorType::FileSystem,
                message: "File storage operation failed".to_string(),
                details: None,
            },

            AppError::Other(_) => Self {
                success: false,
                error_type: ErrorType::Internal,
                message: "Internal server error".to_string(),
                details: None,
            },
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Validation,
            message,
            details: None,
        }
    }

    /// Create not found error
    pub fn not_found(resource: &str) -> Self {
        Self {
            success: false,
            error_type: ErrorType::NotFound,
            message: format!("{} not found", resource),
            details: None,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.error_type.status_code(), Json(self)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        ErrorResponse::from_app_error(self).into_response()
    }
}
