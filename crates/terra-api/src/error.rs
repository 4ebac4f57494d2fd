//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps errors from terra-core and terra-client to HTTP status codes with
//! a JSON body carrying a machine-readable code and a short message.
//! Upstream and internal failure details are logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use terra_client::CountriesApiError;
use terra_core::{RouteError, ValidationError};
use thiserror::Error;
use utoipa::ToSchema;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Country code or region absent upstream (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed input: bad JSON, unknown region, malformed country code (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Well-formed input violating a business rule (422).
    #[error("validation error: {0}")]
    Validation(String),

    /// The countries provider failed or answered with a non-success status (500).
    #[error("upstream countries API error: {0}")]
    Upstream(String),

    /// Internal server error (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::Upstream(_) => (StatusCode::INTERNAL_SERVER_ERROR, "UPSTREAM_ERROR"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Never expose upstream/internal error messages to clients.
        let message = match &self {
            Self::Upstream(_) => "Error fetching countries data".to_string(),
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        match &self {
            Self::Upstream(_) => tracing::error!(error = %self, "upstream countries API error"),
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
            _ => tracing::debug!(error = %self, "request rejected"),
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<RouteError> for AppError {
    fn from(err: RouteError) -> Self {
        match err {
            RouteError::UnknownCountry(_) => Self::NotFound(err.to_string()),
        }
    }
}

impl From<CountriesApiError> for AppError {
    fn from(err: CountriesApiError) -> Self {
        Self::Upstream(err.to_string())
    }
}
