//! # Database Migrations
//!
//! Embedded schema migrations, applied automatically at startup.
//!
//! ## How It Works
//! The `sqlx::migrate!` macro embeds every file under `migrations/sqlite/`
//! into the binary at compile time. At runtime, applied migrations are
//! recorded in the `_sqlx_migrations` table so each one runs exactly once,
//! in filename order.
//!
//! ## Adding A Migration
//! 1. Create `migrations/sqlite/NNN_description.sql` (next number in sequence)
//! 2. Write forward-only SQL (no down migrations)
//! 3. Rebuild; the new file is picked up automatically

use sqlx::migrate::Migrator;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// Embedded migrations, compiled into the binary.
///
/// Path is relative to this crate's Cargo.toml.
static MIGRATOR: Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Applies all pending migrations to the given pool.
///
/// Idempotent: re-running against an up-to-date database is a no-op.
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    debug!("Applying embedded migrations");
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Returns the number of migrations that have been applied.
///
/// ## Usage
/// Diagnostic only; handy when checking whether a database file is current.
pub async fn applied_count(pool: &SqlitePool) -> DbResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        // Connecting already ran them once; a second run must not fail.
        run_migrations(db.pool()).await.unwrap();

        let applied = applied_count(db.pool()).await.unwrap();
        assert!(applied >= 1);
    }
}
