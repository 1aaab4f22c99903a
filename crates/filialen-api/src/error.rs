//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps validation and repository failures to HTTP status codes.
//! Never exposes internal error details in responses.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use filialen_core::FieldErrors;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::repository::RepositoryError;

/// Structured JSON error response body for malformed requests and
/// internal failures.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "BAD_REQUEST", "INTERNAL_ERROR").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details, present only for client errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Validation failure body: field name to message,
/// e.g. `{"naam": "must not be blank"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ValidationErrorBody(pub BTreeMap<String, String>);

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (404, empty body).
    #[error("not found: {0}")]
    NotFound(String),

    /// One or more fields violated their constraints (400, field map body).
    #[error(transparent)]
    Validation(#[from] FieldErrors),

    /// Request body could not be parsed (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        match self {
            Self::NotFound(what) => {
                tracing::debug!(%what, "not found");
                status.into_response()
            }
            Self::Validation(errors) => {
                tracing::debug!(fields = errors.len(), "request failed validation");
                (status, Json(ValidationErrorBody(errors.into()))).into_response()
            }
            other => {
                let message = match &other {
                    Self::Internal(_) => {
                        tracing::error!(error = %other, "internal server error");
                        "An internal error occurred".to_string()
                    }
                    _ => other.to_string(),
                };
                let body = ErrorBody {
                    error: ErrorDetail {
                        code: code.to_string(),
                        message,
                        details: None,
                    },
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

/// Repository failures are never the client's fault.
impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        Self::Internal(err.to_string())
    }
}
