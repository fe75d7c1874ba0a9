//! API error types with HTTP response mapping.

use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog::{DomainError, ProductError, RepositoryError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// API-level error type that maps to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed path parameter or request body.
    #[error("{0}")]
    InvalidArgument(String),

    /// Error raised by the catalog.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    fn new(status: StatusCode, error: &'static str, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error,
            message: message.into(),
            errors: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InvalidArgument(msg) => {
                let status = StatusCode::BAD_REQUEST;
                (status, ErrorResponse::new(status, "Invalid Argument", msg))
            }
            ApiError::Domain(err) => domain_error_to_response(err),
        };

        (status, axum::Json(body)).into_response()
    }
}

fn domain_error_to_response(err: DomainError) -> (StatusCode, ErrorResponse) {
    let (status, title, message) = match err {
        DomainError::Validation(e) => {
            let status = StatusCode::BAD_REQUEST;
            let mut body = ErrorResponse::new(status, "Validation Failed", "Invalid input data");
            body.errors = Some(BTreeMap::from([(e.field().to_string(), e.to_string())]));
            return (status, body);
        }
        e @ DomainError::ProductNotFound(_) => {
            (StatusCode::NOT_FOUND, "Product Not Found", e.to_string())
        }
        DomainError::Product(e @ ProductError::InsufficientStock { .. }) => {
            (StatusCode::BAD_REQUEST, "Business Rule Violation", e.to_string())
        }
        DomainError::Repository(e @ RepositoryError::ConcurrencyConflict { .. }) => {
            (StatusCode::CONFLICT, "Conflict", e.to_string())
        }
        other => {
            tracing::error!(error = %other, "internal server error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "An unexpected error occurred".to_string(),
            )
        }
    };

    (status, ErrorResponse::new(status, title, message))
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidArgument(rejection.body_text())
    }
}
