//! # Report Date Ranges
//!
//! Parses and bounds the `from`/`to` window of status reports.
//!
//! The window is inclusive of BOTH endpoint days: a parcel created any time
//! on the `to` day belongs to the report. SQL gets half-open bounds, so the
//! end bound is midnight of `to + 1 day`, exclusive:
//!
//! ```text
//!   from=2025-03-01  to=2025-03-02
//!
//!   2025-03-01 00:00:00 ──────────────────► 2025-03-03 00:00:00
//!        start_bound (>=)                    end_bound_exclusive (<)
//! ```

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};

use crate::error::{CoreError, CoreResult};

/// The date format reports accept.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated, non-inverted report window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ReportRange {
    /// Parses a `from`/`to` pair of `YYYY-MM-DD` strings.
    ///
    /// ## Failure Modes
    /// - `InvalidRange("invalid date format, expected YYYY-MM-DD")` when
    ///   either string does not parse
    /// - `InvalidRange("from must be <= to")` when the window is inverted
    pub fn parse(from: &str, to: &str) -> CoreResult<Self> {
        let parse_date = |raw: &str| {
            NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
                .map_err(|_| CoreError::invalid_range("invalid date format, expected YYYY-MM-DD"))
        };

        let from = parse_date(from)?;
        let to = parse_date(to)?;

        if from > to {
            return Err(CoreError::invalid_range("from must be <= to"));
        }

        Ok(ReportRange { from, to })
    }

    /// Inclusive lower bound: midnight UTC at the start of `from`.
    pub fn start_bound(&self) -> DateTime<Utc> {
        self.from.and_time(NaiveTime::MIN).and_utc()
    }

    /// Exclusive upper bound: midnight UTC at the start of the day AFTER
    /// `to`, which makes the whole `to` day part of the window.
    pub fn end_bound_exclusive(&self) -> DateTime<Utc> {
        self.to
            .checked_add_days(Days::new(1))
            .unwrap_or(NaiveDate::MAX)
            .and_time(NaiveTime::MIN)
            .and_utc()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
