//! # Parcel Repository
//!
//! Database operations for parcels.
//!
//! ## Two-Phase Creation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │              How A Tracking Code Gets Assigned                      │
//! │                                                                     │
//! │  BEGIN TRANSACTION                                                  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  INSERT parcel with placeholder code "PENDING-<uuid>"               │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  id = last_insert_rowid()      ← the durable identifier             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  code = "PRC-<year>-<id, zero-padded to 6>"                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  UPDATE parcel SET tracking_code = code                             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  COMMIT   ← readers only ever see the finalized code                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The code depends on the row id, which does not exist until the row does,
//! hence the placeholder. The unique uuid suffix keeps simultaneous creates
//! from colliding on the code's unique index mid-transaction. AUTOINCREMENT
//! guarantees ids are never reused, so finalized codes are unique forever.

use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use parcel_core::clock::Clock;
use parcel_core::codes::generate_tracking_code;
use parcel_core::listing::{Page, SortSpec};
use parcel_core::types::{Parcel, ParcelDraft};
use parcel_core::ParcelStatus;

/// Repository for parcel database operations.
///
/// Creates and reads parcels. Status and `delivered_at` are never touched
/// here; those belong to the [`crate::ledger::ScanLedger`].
#[derive(Debug, Clone)]
pub struct ParcelRepository {
    pool: SqlitePool,
}

impl ParcelRepository {
    /// Creates a new ParcelRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ParcelRepository { pool }
    }

    /// Creates a parcel for a customer, assigning its tracking code.
    ///
    /// ## What This Does
    /// 1. Verifies the owning customer exists
    /// 2. Inserts the parcel with a placeholder code (status `new`)
    /// 3. Derives the real code from the fresh row id and the clock's year
    /// 4. Stores the code, all inside one transaction
    ///
    /// ## Arguments
    /// * `clock` - Supplies the creation instant and the code's year stamp
    /// * `draft` - Caller input, already validated at the boundary
    ///
    /// ## Returns
    /// * `Ok(Parcel)` - The stored parcel with its finalized code
    /// * `Err(DbError::NotFound)` - The customer does not exist
    pub async fn create(&self, clock: &dyn Clock, draft: &ParcelDraft) -> DbResult<Parcel> {
        debug!(customer_id = draft.customer_id, "Creating parcel");

        let mut tx = self.pool.begin().await?;

        let customer_exists: Option<i64> = sqlx::query_scalar("SELECT id FROM customers WHERE id = ?1")
            .bind(draft.customer_id)
            .fetch_optional(&mut *tx)
            .await?;

        if customer_exists.is_none() {
            return Err(DbError::not_found("Customer", draft.customer_id.to_string()));
        }

        // Placeholder is unique per attempt so two concurrent creates never
        // collide on the code's unique index before finalization
        let placeholder = format!("PENDING-{}", Uuid::new_v4());
        let now = clock.now();

        let result = sqlx::query(
            r#"
            INSERT INTO parcels (
                tracking_code, customer_id, status,
                weight_kg, addr_from, addr_to,
                created_at, delivered_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, NULL)
            "#,
        )
        .bind(&placeholder)
        .bind(draft.customer_id)
        .bind(ParcelStatus::New)
        .bind(draft.weight_kg)
        .bind(&draft.addr_from)
        .bind(&draft.addr_to)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        let id = result.last_insert_rowid();
        let tracking_code = generate_tracking_code(clock, id);

        sqlx::query("UPDATE parcels SET tracking_code = ?2 WHERE id = ?1")
            .bind(id)
            .bind(&tracking_code)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(id, code = %tracking_code, "Parcel created");
        self.find_by_id(id).await
    }

    /// Gets a parcel by its internal row id.
    pub async fn find_by_id(&self, id: i64) -> DbResult<Parcel> {
        let parcel = sqlx::query_as::<_, Parcel>(
            r#"
            SELECT id, tracking_code, customer_id, status,
                   weight_kg, addr_from, addr_to,
                   created_at, delivered_at
            FROM parcels
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        parcel.ok_or_else(|| DbError::not_found("Parcel", id.to_string()))
    }

    /// Gets a parcel by its tracking code.
    ///
    /// ## Why By Code
    /// External callers only ever hold the code; the row id is internal.
    /// The lookup hits the unique index on `tracking_code`.
    ///
    /// ## Returns
    /// * `Ok(Parcel)` - Parcel found
    /// * `Err(DbError::NotFound)` - No parcel with this code
    pub async fn find_by_tracking_code(&self, code: &str) -> DbResult<Parcel> {
        let parcel = sqlx::query_as::<_, Parcel>(
            r#"
            SELECT id, tracking_code, customer_id, status,
                   weight_kg, addr_from, addr_to,
                   created_at, delivered_at
            FROM parcels
            WHERE tracking_code = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        parcel.ok_or_else(|| DbError::not_found("Parcel", code))
    }

    /// Lists parcels with optional owner-name search, sort, and pagination.
    ///
    /// ## Arguments
    /// * `search` - Substring matched case-insensitively against the owning
    ///   customer's name (parcels have no name of their own)
    /// * `sort` - Whitelisted parcel column + direction
    /// * `page` - 1-based bounded page
    pub async fn list(
        &self,
        search: Option<&str>,
        sort: SortSpec,
        page: Page,
    ) -> DbResult<Vec<Parcel>> {
        debug!(?search, field = sort.field, "Listing parcels");

        // Columns are qualified because the search branch joins customers,
        // which has its own created_at and id
        let order_by = format!("p.{} {}, p.id ASC", sort.field, sort.direction.as_sql());

        let parcels = match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => {
                let like = format!("%{}%", term);
                sqlx::query_as::<_, Parcel>(&format!(
                    r#"
                    SELECT p.id, p.tracking_code, p.customer_id, p.status,
                           p.weight_kg, p.addr_from, p.addr_to,
                           p.created_at, p.delivered_at
                    FROM parcels p
                    INNER JOIN customers c ON c.id = p.customer_id
                    WHERE c.name LIKE ?1
                    ORDER BY {order_by}
                    LIMIT ?2 OFFSET ?3
                    "#,
                ))
                .bind(like)
                .bind(page.limit())
                .bind(page.offset())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Parcel>(&format!(
                    r#"
                    SELECT p.id, p.tracking_code, p.customer_id, p.status,
                           p.weight_kg, p.addr_from, p.addr_to,
                           p.created_at, p.delivered_at
                    FROM parcels p
                    ORDER BY {order_by}
                    LIMIT ?1 OFFSET ?2
                    "#,
                ))
                .bind(page.limit())
                .bind(page.offset())
                .fetch_all(&self.pool)
                .await?
            }
        };

        debug!(count = parcels.len(), "Listing returned parcels");
        Ok(parcels)
    }

    /// Counts all parcels (for diagnostics and seed output).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM parcels")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
