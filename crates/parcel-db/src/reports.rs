//! # Report Repository
//!
//! Aggregate queries over parcels.
//!
//! ## Status Report
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │          count_by_status("2025-03-01", "2025-03-02")                │
//! │                                                                     │
//! │  WHERE created_at >= 2025-03-01 00:00                               │
//! │    AND created_at <  2025-03-03 00:00   ← whole end day included    │
//! │  GROUP BY status                                                    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  { "new": 1, "pickup": 0, "in_transit": 2,                          │
//! │    "out_for_delivery": 0, "delivered": 1, "return": 0 }             │
//! │                                                                     │
//! │  Every status key is always present, zero-filled; consumers never   │
//! │  need presence checks.                                              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use parcel_core::range::ReportRange;
use parcel_core::ParcelStatus;

/// Repository for aggregate parcel reports.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Counts parcels by status, over parcels created inside the range.
    ///
    /// ## Arguments
    /// * `range` - Parsed, already-ordered date window. Bounds come from
    ///   [`ReportRange::start_bound`] and [`ReportRange::end_bound_exclusive`],
    ///   so the whole end day is included.
    ///
    /// ## Returns
    /// A mapping from every known status to its count, zero-filled. The
    /// `BTreeMap` iterates in status declaration order, giving reports a
    /// stable key order.
    pub async fn count_by_status(
        &self,
        range: &ReportRange,
    ) -> DbResult<BTreeMap<ParcelStatus, i64>> {
        debug!(from = %range.from, to = %range.to, "Counting parcels by status");

        let rows = sqlx::query_as::<_, (ParcelStatus, i64)>(
            r#"
            SELECT status, COUNT(*)
            FROM parcels
            WHERE created_at >= ?1 AND created_at < ?2
            GROUP BY status
            "#,
        )
        .bind(range.start_bound())
        .bind(range.end_bound_exclusive())
        .fetch_all(&self.pool)
        .await?;

        let mut counts: BTreeMap<ParcelStatus, i64> =
            ParcelStatus::ALL.iter().map(|s| (*s, 0)).collect();
        for (status, count) in rows {
            counts.insert(status, count);
        }

        Ok(counts)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
