//! # Clock Capability
//!
//! Time is the one ambient input the domain logic needs (tracking codes are
//! year-stamped). Reading the wall clock directly would make code generation
//! untestable and hide a global dependency, so the current instant is always
//! passed in through the [`Clock`] trait.
//!
//! Production code injects [`SystemClock`]; tests and the seed tool inject
//! [`FixedClock`] to pin the calendar year.

use chrono::{DateTime, Datelike, TimeZone, Utc};

/// A source of the current UTC instant.
///
/// Object-safe so callers can hold a `&dyn Clock` or `Arc<dyn Clock>`
/// without caring which implementation is behind it.
pub trait Clock: Send + Sync {
    /// The current instant in UTC.
    fn now(&self) -> DateTime<Utc>;

    /// The current calendar year in UTC.
    fn year(&self) -> i32 {
        self.now().year()
    }
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant.
///
/// Used by tests and the seed binary to make year-stamped output
/// deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Freezes the clock at the given UTC date, at noon.
    ///
    /// Noon keeps the fixed instant well clear of day boundaries in either
    /// direction.
    pub fn on_date(year: i32, month: u32, day: u32) -> Self {
        // Epoch fallback keeps the constructor total; callers pass calendar
        // dates, not arbitrary numbers.
        let instant = Utc
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .unwrap_or(DateTime::UNIX_EPOCH);
        FixedClock(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
