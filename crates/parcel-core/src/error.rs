//! # Error Types
//!
//! Domain-specific error types for parcel-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  parcel-core errors (this file)                                     │
//! │  ├── CoreError        - Transition and range rule violations        │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  parcel-db errors (separate crate)                                  │
//! │  ├── DbError          - Database operation failures                 │
//! │  └── LedgerError      - Transition persistence failures             │
//! │                                                                     │
//! │  API errors (in app)                                                │
//! │  └── ApiError         - What HTTP callers see (status + body)       │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → LedgerError → ApiError → HTTP  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (statuses, field names)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a caller-facing message

use thiserror::Error;

use crate::status::ParcelStatus;

// =============================================================================
// Core Error
// =============================================================================

/// Domain rule violations.
///
/// These are business failures a caller can act on, and every variant maps
/// onto a well-defined HTTP status at the boundary (409 for transition
/// violations, 400 for bad report ranges).
#[derive(Debug, Error)]
pub enum CoreError {
    /// The parcel is in a terminal status and accepts no further scans.
    ///
    /// ## When This Occurs
    /// - A scan arrives for a parcel already `delivered`
    /// - A scan arrives for a parcel already sent to `return`
    ///
    /// The message is fixed; the current status travels as a field for
    /// callers that want it.
    #[error("parcel is finalized, scans are not allowed")]
    TerminalState { current: ParcelStatus },

    /// The requested status is not reachable from the current one.
    ///
    /// ## When This Occurs
    /// - Skipping a step (`new -> in_transit`)
    /// - Walking backwards (`in_transit -> pickup`)
    /// - Repeating the current status (`pickup -> pickup`)
    #[error("illegal status transition: {from} -> {to}")]
    IllegalTransition { from: ParcelStatus, to: ParcelStatus },

    /// A report date range could not be used.
    ///
    /// ## When This Occurs
    /// - A date is not `YYYY-MM-DD`
    /// - `from` is after `to`
    #[error("{reason}")]
    InvalidRange { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Builds a [`CoreError::InvalidRange`] from anything printable.
    pub fn invalid_range(reason: impl Into<String>) -> Self {
        CoreError::InvalidRange {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before domain logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., non-finite weight).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
