//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps domain errors from parcel-core and parcel-db to HTTP status codes
//! and JSON bodies with a machine-readable code plus a human message.
//! Internal persistence failures are logged but never echoed to clients.
//!
//! ## Mapping
//! ```text
//! NotFound            → 404 NOT_FOUND       (unknown customer/parcel/code)
//! Conflict            → 409 CONFLICT       (terminal/illegal/raced scan)
//! InvalidRange        → 400 INVALID_RANGE  (bad or inverted report dates)
//! Validation          → 422 VALIDATION     (field-level input problems)
//! Internal            → 500 INTERNAL       (unexpected persistence failure)
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use parcel_core::{CoreError, ValidationError};
use parcel_db::{DbError, LedgerError};

/// Structured JSON error response body.
///
/// All error responses share this shape so clients parse one format.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "CONFLICT").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`] for axum.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Resource not found (404).
    #[error("{0}")]
    NotFound(String),

    /// State-machine violation or lost write race (409).
    #[error("{0}")]
    Conflict(String),

    /// Bad or inverted report date range (400).
    #[error("{0}")]
    InvalidRange(String),

    /// Request input failed validation (422).
    #[error("{0}")]
    Validation(String),

    /// Internal server error (500). Message is logged, not returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// The HTTP status and machine-readable code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            Self::InvalidRange(_) => (StatusCode::BAD_REQUEST, "INVALID_RANGE"),
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Never expose internal failure details to clients
        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        if let Self::Internal(_) = &self {
            tracing::error!(error = %self, "internal server error");
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

/// Convert core domain errors to API errors.
///
/// The conflict messages come straight from the status machine so the
/// client sees which statuses collided.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match &err {
            CoreError::TerminalState { .. } | CoreError::IllegalTransition { .. } => {
                Self::Conflict(err.to_string())
            }
            CoreError::InvalidRange { .. } => Self::InvalidRange(err.to_string()),
            CoreError::Validation(_) => Self::Validation(err.to_string()),
        }
    }
}

/// Convert field validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Convert storage errors to API errors.
///
/// Lookup misses keep the short lowercase phrasing callers match on
/// ("customer not found", "parcel not found"); everything else is an
/// internal failure from the client's point of view.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match &err {
            DbError::NotFound { entity, .. } => {
                Self::NotFound(format!("{} not found", entity.to_lowercase()))
            }
            _ => Self::Internal(err.to_string()),
        }
    }
}

/// Convert ledger errors to API errors.
impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Transition(core) => core.into(),
            race @ LedgerError::TransitionRace { .. } => Self::Conflict(race.to_string()),
            LedgerError::Db(db) => db.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
