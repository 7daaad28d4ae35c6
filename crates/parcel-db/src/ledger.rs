//! # Scan Ledger
//!
//! The single writer of scans and parcel statuses.
//!
//! ## Transaction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │              apply_transition() - ATOMIC TRANSACTION                │
//! │                                                                     │
//! │  BEGIN TRANSACTION                                                  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  1. Read parcel by tracking code ──► NotFound? ──► error            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  2. Check transition table                                          │
//! │     current terminal?        ──► TerminalState (409)                │
//! │     requested not allowed?   ──► IllegalTransition (409)            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  3. INSERT scan (type, ts, location, note)                          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  4. UPDATE parcel                                                   │
//! │        SET status = requested,                                      │
//! │            delivered_at = COALESCE(delivered_at, ts-if-delivered)   │
//! │        WHERE id = ? AND status = <status we read in step 1>         │
//! │       │                                                             │
//! │       ├── rows_affected = 0 ──► ROLLBACK ──► TransitionRace         │
//! │       ▼                                                             │
//! │  COMMIT  ← scan + status + delivered_at land together or not at all │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why The Guarded UPDATE
//! Two concurrent requests can both read the same current status before
//! either one writes (e.g. both see `out_for_delivery`, one asks for
//! `delivered`, the other for `return`). SQLite serializes the writes, so
//! the second UPDATE runs after the first commit; its `AND status = ?`
//! clause then matches zero rows, the whole transaction rolls back, and the
//! caller gets a conflict instead of a silently corrupted ledger. Requests
//! against different parcels never touch the same row and do not contend.
//!
//! A failed attempt of any kind leaves the parcel untouched: the scan
//! insert from step 3 rolls back with the transaction, preserving the
//! ledger-length invariant.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, LedgerError, LedgerResult};
use parcel_core::status::validate_transition;
use parcel_core::types::{Parcel, Scan};
use parcel_core::ParcelStatus;

/// Applies scan events to parcels, atomically.
///
/// ## Usage
/// ```rust,ignore
/// let ledger = db.ledger();
///
/// let scan = ledger
///     .apply_transition("PRC-2025-000001", ParcelStatus::Pickup, ts, "North depot", None)
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct ScanLedger {
    pool: SqlitePool,
}

impl ScanLedger {
    /// Creates a new ScanLedger.
    pub fn new(pool: SqlitePool) -> Self {
        ScanLedger { pool }
    }

    /// Records a handling event and moves the parcel's status, atomically.
    ///
    /// ## Arguments
    /// * `tracking_code` - External key of the parcel being scanned
    /// * `requested` - The status this scan moves the parcel into
    /// * `ts` - When the handling event happened (caller-supplied)
    /// * `location` - Where it happened
    /// * `note` - Optional free-text note
    ///
    /// ## Returns
    /// * `Ok(Scan)` - The recorded scan
    /// * `Err(LedgerError::Db(NotFound))` - Unknown tracking code
    /// * `Err(LedgerError::Transition)` - Terminal parcel or illegal move
    /// * `Err(LedgerError::TransitionRace)` - Lost to a concurrent scan
    ///
    /// ## Effects
    /// On success, exactly three things change: a scan row exists, the
    /// parcel's status equals `requested`, and (for a first `delivered`)
    /// `delivered_at` is set to `ts`. On any failure nothing changes.
    pub async fn apply_transition(
        &self,
        tracking_code: &str,
        requested: ParcelStatus,
        ts: DateTime<Utc>,
        location: &str,
        note: Option<&str>,
    ) -> LedgerResult<Scan> {
        debug!(code = %tracking_code, requested = %requested, "Applying scan transition");

        let mut tx = self.pool.begin().await.map_err(DbError::from)?;

        let parcel = sqlx::query_as::<_, Parcel>(
            r#"
            SELECT id, tracking_code, customer_id, status,
                   weight_kg, addr_from, addr_to,
                   created_at, delivered_at
            FROM parcels
            WHERE tracking_code = ?1
            "#,
        )
        .bind(tracking_code)
        .fetch_optional(&mut *tx)
        .await
        .map_err(DbError::from)?
        .ok_or_else(|| DbError::not_found("Parcel", tracking_code))?;

        // Terminal and table checks, in that order (terminal wins the
        // error message even though the table also forbids the move)
        validate_transition(parcel.status, requested)?;

        let insert = sqlx::query(
            r#"
            INSERT INTO scans (parcel_id, ts, location, scan_type, note)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(parcel.id)
        .bind(ts)
        .bind(location)
        .bind(requested)
        .bind(note)
        .execute(&mut *tx)
        .await
        .map_err(DbError::from)?;

        let scan_id = insert.last_insert_rowid();

        // First delivery wins: COALESCE leaves an existing delivered_at
        // alone, and a non-delivered scan binds NULL so nothing changes
        let delivered_ts: Option<DateTime<Utc>> = if requested == ParcelStatus::Delivered {
            Some(ts)
        } else {
            None
        };

        let update = sqlx::query(
            r#"
            UPDATE parcels
            SET status = ?3,
                delivered_at = COALESCE(delivered_at, ?4)
            WHERE id = ?1 AND status = ?2
            "#,
        )
        .bind(parcel.id)
        .bind(parcel.status)
        .bind(requested)
        .bind(delivered_ts)
        .execute(&mut *tx)
        .await
        .map_err(DbError::from)?;

        if update.rows_affected() == 0 {
            // Someone else moved this parcel after our read; dropping the
            // transaction rolls the scan insert back
            return Err(LedgerError::TransitionRace {
                tracking_code: tracking_code.to_string(),
            });
        }

        tx.commit().await.map_err(DbError::from)?;

        info!(
            code = %tracking_code,
            from = %parcel.status,
            to = %requested,
            "Scan recorded"
        );

        Ok(Scan {
            id: scan_id,
            parcel_id: parcel.id,
            ts,
            location: location.to_string(),
            scan_type: requested,
            note: note.map(str::to_string),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
