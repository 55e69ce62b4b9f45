//! Typed error handling for the events API
//!
//! Every failure a handler can produce is expressed as an [`ApiError`], which
//! knows its HTTP status code, a stable error code and how to render itself.
//!
//! # Error Categories
//!
//! - [`ApiError::Validation`]: rejected input, rendered as an errors resource
//! - [`ApiError::NotFound`]: unknown id, rendered as an empty 404
//! - [`StorageError`]: failures reported by a store backend
//! - [`ConfigError`]: failures while loading configuration
//! - [`AccountError`]: failures of the account service
//!
//! # Example
//!
//! ```rust,ignore
//! async fn get_event(state: &AppState, id: i64) -> Result<Event, ApiError> {
//!     state.event_store.find_by_id(id).await?.ok_or(ApiError::NotFound)
//! }
//! ```

use crate::links::{ErrorsResource, Hal};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type returned by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input was rejected; the resource lists every error found
    #[error("request validation failed with {} error(s)", .0.errors.len())]
    Validation(ErrorsResource),

    /// The requested resource does not exist
    #[error("resource not found")]
    NotFound,

    /// Storage backend errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Account service errors
    #[error(transparent)]
    Account(#[from] AccountError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Unexpected internal failure
    #[error("internal error: {0}")]
    Internal(String),
}

/// Error body for failures that are not rendered as hypermedia
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Account(e) => e.status_code(),
            ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::NotFound => "NOT_FOUND",
            ApiError::Storage(e) => e.error_code(),
            ApiError::Account(e) => e.error_code(),
            ApiError::Config(_) => "CONFIG_ERROR",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to a plain error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Validation(resource) => (status, Hal(resource)).into_response(),
            ApiError::NotFound => status.into_response(),
            other => {
                if status.is_server_error() {
                    tracing::error!(code = other.error_code(), error = %other, "request failed");
                }
                (status, Json(other.to_response())).into_response()
            }
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors reported by store backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not be reached
    #[error("{backend} connection error: {message}")]
    ConnectionError { backend: String, message: String },

    /// A query or write failed
    #[error("{backend} {operation} failed: {message}")]
    OperationFailed {
        backend: String,
        operation: String,
        message: String,
    },
}

impl StorageError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::ConnectionError { .. } => "STORAGE_CONNECTION_ERROR",
            StorageError::OperationFailed { .. } => "STORAGE_OPERATION_FAILED",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("failed to parse config{}: {message}", .file.as_ref().map(|f| format!(" file '{f}'")).unwrap_or_default())]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Configuration file not found
    #[error("configuration file not found: {path}")]
    FileNotFound { path: String },

    /// IO error while reading configuration
    #[error("IO error: {message}")]
    IoError { message: String },

    /// Invalid value in configuration
    #[error("invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}

// =============================================================================
// Account Errors
// =============================================================================

/// Errors raised by the account service
#[derive(Debug, Error)]
pub enum AccountError {
    /// No account is registered under this username
    #[error("no account found for username '{0}'")]
    UsernameNotFound(String),

    /// Password hashing or hash parsing failed
    #[error("password hash error: {0}")]
    PasswordHash(String),

    /// The account store failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AccountError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::UsernameNotFound(_) => StatusCode::UNAUTHORIZED,
            AccountError::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AccountError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AccountError::UsernameNotFound(_) => "USERNAME_NOT_FOUND",
            AccountError::PasswordHash(_) => "PASSWORD_HASH_ERROR",
            AccountError::Storage(e) => e.error_code(),
        }
    }
}
