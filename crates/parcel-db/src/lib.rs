//! # parcel-db: Database Layer for the Parcel Tracker
//!
//! This crate provides database access for the parcel tracker.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Parcel Tracker Data Flow                        │
//! │                                                                     │
//! │  HTTP handler (POST /parcels/:code/scans)                           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                   parcel-db (THIS CRATE)                      │ │
//! │  │                                                               │ │
//! │  │  ┌────────────┐  ┌──────────────┐  ┌────────────────────┐   │ │
//! │  │  │  Database  │  │ Repositories │  │    ScanLedger      │   │ │
//! │  │  │ (pool.rs)  │  │  customer    │  │  one transaction:  │   │ │
//! │  │  │            │◄─│  parcel      │◄─│  read + validate + │   │ │
//! │  │  │ SqlitePool │  │  scan        │  │  scan + update     │   │ │
//! │  │  └────────────┘  └──────────────┘  └────────────────────┘   │ │
//! │  │         ▲                                                     │ │
//! │  │         │        ┌──────────────┐  ┌────────────────────┐   │ │
//! │  │         └────────│   Reports    │  │     Migrations     │   │ │
//! │  │                  │ (reports.rs) │  │     (embedded)     │   │ │
//! │  │                  └──────────────┘  └────────────────────┘   │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database file (WAL mode, foreign keys ON)                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database and ledger error types
//! - [`repository`] - Repository implementations (customer, parcel, scan)
//! - [`ledger`] - The atomic scan-append + status-update transaction
//! - [`reports`] - Status-count aggregation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use parcel_db::{Database, DbConfig};
//! use parcel_core::SystemClock;
//!
//! let db = Database::new(DbConfig::new("parcels.db")).await?;
//!
//! let parcel = db.parcels().create(&SystemClock, &draft).await?;
//! let scan = db
//!     .ledger()
//!     .apply_transition(&parcel.tracking_code, ParcelStatus::Pickup, ts, "North depot", None)
//!     .await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ledger;
pub mod migrations;
pub mod pool;
pub mod reports;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult, LedgerError, LedgerResult};
pub use ledger::ScanLedger;
pub use pool::{Database, DbConfig};
pub use reports::ReportRepository;

// Repository re-exports for convenience
pub use repository::customer::CustomerRepository;
pub use repository::parcel::ParcelRepository;
pub use repository::scan::ScanRepository;
