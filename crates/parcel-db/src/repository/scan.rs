//! # Scan Repository
//!
//! Read-only access to parcel scan timelines.
//!
//! Writing a scan always goes through the [`crate::ledger::ScanLedger`], so
//! the scan and its status effect commit together. This repository exists
//! purely for the read side: paginated timeline listings and counts.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use parcel_core::listing::{Page, SortSpec};
use parcel_core::types::Scan;

/// Repository for reading scans.
///
/// ## Usage
/// ```rust,ignore
/// let scans = db.scans().list_for_parcel(parcel.id, sort, page).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ScanRepository {
    pool: SqlitePool,
}

impl ScanRepository {
    /// Creates a new ScanRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ScanRepository { pool }
    }

    /// Lists a parcel's scans, sorted and paginated.
    ///
    /// ## Arguments
    /// * `parcel_id` - Internal id of the parcel (resolve the code first)
    /// * `sort` - Whitelisted scan column + direction
    /// * `page` - 1-based bounded page
    ///
    /// The id tiebreaker keeps pages stable when several scans share a
    /// timestamp.
    pub async fn list_for_parcel(
        &self,
        parcel_id: i64,
        sort: SortSpec,
        page: Page,
    ) -> DbResult<Vec<Scan>> {
        debug!(parcel_id, field = sort.field, "Listing scans");

        let order_by = format!("{} {}, id ASC", sort.field, sort.direction.as_sql());

        let scans = sqlx::query_as::<_, Scan>(&format!(
            r#"
            SELECT id, parcel_id, ts, location, scan_type, note
            FROM scans
            WHERE parcel_id = ?1
            ORDER BY {order_by}
            LIMIT ?2 OFFSET ?3
            "#,
        ))
        .bind(parcel_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        debug!(count = scans.len(), "Listing returned scans");
        Ok(scans)
    }

    /// Counts the scans recorded for a parcel.
    ///
    /// ## Usage
    /// The ledger-length invariant in tests: a failed transition must leave
    /// this count unchanged.
    pub async fn count_for_parcel(&self, parcel_id: i64) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM scans WHERE parcel_id = ?1")
            .bind(parcel_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
