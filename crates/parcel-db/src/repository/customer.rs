//! # Customer Repository
//!
//! Database operations for customers.
//!
//! ## Key Operations
//! - CRUD with partial updates
//! - Case-insensitive name search
//! - Whitelisted sort + bounded pagination
//!
//! Deleting a customer cascades to their parcels and those parcels' scans
//! (enforced by the schema's foreign keys, see the initial migration).

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use parcel_core::listing::{Page, SortSpec};
use parcel_core::types::{Customer, CustomerDraft, CustomerPatch};

/// Repository for customer database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.customers();
///
/// let created = repo.create(&draft).await?;
/// let found = repo.find_by_id(created.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Inserts a new customer.
    ///
    /// ## Arguments
    /// * `draft` - Caller input, already validated at the boundary
    ///
    /// ## Returns
    /// * `Ok(Customer)` - The stored row, including its assigned id
    pub async fn create(&self, draft: &CustomerDraft) -> DbResult<Customer> {
        debug!(name = %draft.name, "Inserting customer");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO customers (name, phone, created_at)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.phone)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.find_by_id(result.last_insert_rowid()).await
    }

    /// Gets a customer by id.
    ///
    /// ## Returns
    /// * `Ok(Customer)` - Customer found
    /// * `Err(DbError::NotFound)` - No such customer
    pub async fn find_by_id(&self, id: i64) -> DbResult<Customer> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, phone, created_at
            FROM customers
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        customer.ok_or_else(|| DbError::not_found("Customer", id.to_string()))
    }

    /// Applies a partial update to a customer.
    ///
    /// Fields left as `None` in the patch keep their stored value. An empty
    /// patch is a valid no-op that still returns the current row.
    ///
    /// ## Returns
    /// * `Ok(Customer)` - The row after the update
    /// * `Err(DbError::NotFound)` - No such customer
    pub async fn update(&self, id: i64, patch: &CustomerPatch) -> DbResult<Customer> {
        debug!(id, "Updating customer");

        let current = self.find_by_id(id).await?;

        let name = patch.name.as_deref().unwrap_or(&current.name);
        let phone = match &patch.phone {
            Some(phone) => Some(phone.as_str()),
            None => current.phone.as_deref(),
        };

        let result = sqlx::query(
            r#"
            UPDATE customers
            SET name = ?2, phone = ?3
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(phone)
        .execute(&self.pool)
        .await?;

        // The row can vanish between the read and the write
        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Customer", id.to_string()));
        }

        self.find_by_id(id).await
    }

    /// Deletes a customer and, via cascade, all their parcels and scans.
    ///
    /// ## Returns
    /// * `Ok(())` - Deleted
    /// * `Err(DbError::NotFound)` - No such customer
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting customer");

        let result = sqlx::query("DELETE FROM customers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Customer", id.to_string()));
        }

        Ok(())
    }

    /// Lists customers with optional name search, sort, and pagination.
    ///
    /// ## Arguments
    /// * `search` - Substring matched against the name. SQLite's `LIKE` is
    ///   already case-insensitive for ASCII, which is the contract here.
    /// * `sort` - Whitelisted sort column + direction (safe to interpolate)
    /// * `page` - 1-based bounded page
    pub async fn list(
        &self,
        search: Option<&str>,
        sort: SortSpec,
        page: Page,
    ) -> DbResult<Vec<Customer>> {
        debug!(?search, field = sort.field, "Listing customers");

        // sort.field comes from a whitelist of column names, never from the
        // caller, so interpolating it into ORDER BY is safe
        let order_by = format!("{} {}, id ASC", sort.field, sort.direction.as_sql());

        let customers = match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => {
                let like = format!("%{}%", term);
                sqlx::query_as::<_, Customer>(&format!(
                    r#"
                    SELECT id, name, phone, created_at
                    FROM customers
                    WHERE name LIKE ?1
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
                sqlx::query_as::<_, Customer>(&format!(
                    r#"
                    SELECT id, name, phone, created_at
                    FROM customers
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

        debug!(count = customers.len(), "Listing returned customers");
        Ok(customers)
    }

    /// Counts all customers (for diagnostics and seed output).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
