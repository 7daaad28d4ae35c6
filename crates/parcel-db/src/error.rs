//! # Database Error Types
//!
//! Error types for database and ledger operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  SQLite Error (sqlx::Error)                                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  DbError (this module) ← Adds context and categorization            │
//! │       │                                                             │
//! │       ├── LedgerError wraps DbError + CoreError for transitions     │
//! │       ▼                                                             │
//! │  ApiError (in apps/api) ← Status code + JSON body                   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  HTTP caller sees 404 / 409 / 400 / 500                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use parcel_core::CoreError;

// =============================================================================
// Database Error
// =============================================================================

/// Database operation errors.
///
/// These errors wrap sqlx errors and provide additional context
/// for debugging and caller feedback.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in database.
    ///
    /// ## When This Occurs
    /// - A guarded UPDATE matched no row
    /// - A lookup by id or tracking code found nothing
    #[error("{entity} not found: {key}")]
    NotFound { entity: String, key: String },

    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - A duplicate tracking code (should be impossible by construction)
    /// - Any UNIQUE index violation
    #[error("Duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// Foreign key constraint violation.
    ///
    /// ## When This Occurs
    /// - Creating a parcel for a customer id that does not exist
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Transaction begin/commit failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and lookup key.
    pub fn not_found(entity: impl Into<String>, key: impl Into<String>) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            key: key.into(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → Analyze message for constraint type
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                key: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite constraint messages:
                // UNIQUE constraint: "UNIQUE constraint failed: <table>.<column>"
                // FK constraint: "FOREIGN KEY constraint failed"
                if msg.contains("UNIQUE constraint failed") {
                    let field = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    DbError::UniqueViolation {
                        field,
                        value: "unknown".to_string(),
                    }
                } else if msg.contains("FOREIGN KEY constraint failed") {
                    DbError::ForeignKeyViolation {
                        message: msg.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Ledger Error
// =============================================================================

/// Failures of the scan-ledger transition transaction.
///
/// A transition can fail three ways, and the API boundary treats each
/// differently:
/// - the transition table said no → 409 with the core message
/// - another writer won the race → 409, retryable
/// - the database itself failed → 404 or 500 per the DbError
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The transition violates the status machine (terminal or illegal).
    #[error(transparent)]
    Transition(#[from] CoreError),

    /// A concurrent transition on the same parcel committed first, so the
    /// status this attempt validated against is stale.
    #[error("conflicting concurrent scan for parcel {tracking_code}")]
    TransitionRace { tracking_code: String },

    /// Underlying database failure.
    #[error(transparent)]
    Db(#[from] DbError),
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DbError::not_found("Parcel", "PRC-2025-000001");
        assert_eq!(err.to_string(), "Parcel not found: PRC-2025-000001");
    }

    #[test]
    fn test_ledger_error_passes_core_message_through() {
        let core = CoreError::IllegalTransition {
            from: parcel_core::ParcelStatus::New,
            to: parcel_core::ParcelStatus::Delivered,
        };
        let err = LedgerError::from(core);
        assert_eq!(
            err.to_string(),
            "illegal status transition: new -> delivered"
        );
    }

    #[test]
    fn test_race_message_names_the_parcel() {
        let err = LedgerError::TransitionRace {
            tracking_code: "PRC-2025-000007".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "conflicting concurrent scan for parcel PRC-2025-000007"
        );
    }
}
