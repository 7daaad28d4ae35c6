//! Shared application state.
//!
//! One `AppState` is built at startup and cloned into every handler by
//! axum. Cloning is cheap: the database handle shares its pool and the
//! clock is behind an `Arc`.

use std::sync::Arc;

use parcel_core::{Clock, SystemClock};
use parcel_db::Database;

/// State available to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Database handle (pool + repositories).
    pub db: Database,

    /// Time source for tracking codes and creation stamps. Injected so
    /// tests can pin the year.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates state with the real system clock.
    pub fn new(db: Database) -> Self {
        AppState {
            db,
            clock: Arc::new(SystemClock),
        }
    }

    /// Creates state with an explicit clock.
    pub fn with_clock(db: Database, clock: Arc<dyn Clock>) -> Self {
        AppState { db, clock }
    }
}
