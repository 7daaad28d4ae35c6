//! # Domain Types
//!
//! Core domain types used throughout the parcel tracker.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │    Customer    │   │     Parcel     │   │      Scan      │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  id (i64)      │◄──│  customer_id   │◄──│  parcel_id     │      │
//! │  │  name          │   │  tracking_code │   │  ts            │      │
//! │  │  phone?        │   │  status        │   │  scan_type     │      │
//! │  │  created_at    │   │  delivered_at? │   │  location      │      │
//! │  └────────────────┘   └────────────────┘   └────────────────┘      │
//! │                                                                     │
//! │  Drafts (CustomerDraft, ParcelDraft) are the only way in: they      │
//! │  carry caller input and have no id, code, or status of their own.   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! A parcel has:
//! - `id`: i64 AUTOINCREMENT - immutable, used for relations and code derivation
//! - `tracking_code`: human-readable business key, what external callers hold

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::ParcelStatus;

// =============================================================================
// Customer
// =============================================================================

/// A customer who sends parcels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    /// Durable row identifier.
    pub id: i64,

    /// Display name, searched case-insensitively in listings.
    pub name: String,

    /// Contact phone, free-form.
    pub phone: Option<String>,

    /// When the customer was created.
    pub created_at: DateTime<Utc>,
}

/// Caller input for creating a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Partial update for a customer. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

// =============================================================================
// Parcel
// =============================================================================

/// A parcel moving through the shipping network.
///
/// Invariants the rest of the system preserves:
/// - `status` equals the type of the most recent scan, or `new` with no scans
/// - `tracking_code` is globally unique and assigned exactly once, at
///   creation, from the parcel's own id
/// - `delivered_at` is set by the first `delivered` scan and never changes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Parcel {
    /// Durable row identifier; also the sequence inside the tracking code.
    pub id: i64,

    /// Unique business key (`PRC-<year>-<seq>`), what callers look up by.
    pub tracking_code: String,

    /// Owning customer.
    pub customer_id: i64,

    /// Current handling status. Mutated only by the scan ledger.
    pub status: ParcelStatus,

    /// Declared weight in kilograms.
    pub weight_kg: f64,

    /// Origin address line.
    pub addr_from: String,

    /// Destination address line.
    pub addr_to: String,

    /// When the parcel was created.
    pub created_at: DateTime<Utc>,

    /// When the parcel was first delivered, if it ever was.
    pub delivered_at: Option<DateTime<Utc>>,
}

impl Parcel {
    /// Whether this parcel accepts no further scans.
    #[inline]
    pub fn is_finalized(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Caller input for creating a parcel.
///
/// Deliberately has no id, code, or status field: parcels always start as
/// `new`, and the code is derived after the durable id exists. Nothing
/// outside the repository ever sees the intermediate placeholder state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParcelDraft {
    pub customer_id: i64,

    #[serde(default)]
    pub weight_kg: f64,

    pub addr_from: String,

    pub addr_to: String,
}

// =============================================================================
// Scan
// =============================================================================

/// An immutable record of a single handling event.
///
/// A scan both documents the event and declares the status it moved the
/// parcel into. Scans are never updated or deleted individually; they only
/// disappear when their parcel is cascade-deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Scan {
    /// Durable row identifier.
    pub id: i64,

    /// Owning parcel.
    pub parcel_id: i64,

    /// When the handling event happened (caller-supplied, not insert time).
    pub ts: DateTime<Utc>,

    /// Where the event happened, free-form.
    pub location: String,

    /// The status this scan moved the parcel into.
    #[serde(rename = "type")]
    pub scan_type: ParcelStatus,

    /// Optional free-text note from the handler.
    pub note: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_parcel(status: ParcelStatus) -> Parcel {
        Parcel {
            id: 7,
            tracking_code: "PRC-2025-000007".to_string(),
            customer_id: 1,
            status,
            weight_kg: 1.5,
            addr_from: "North depot".to_string(),
            addr_to: "12 Harbor St".to_string(),
            created_at: Utc::now(),
            delivered_at: None,
        }
    }

    #[test]
    fn test_parcel_finalized_follows_status() {
        assert!(!sample_parcel(ParcelStatus::New).is_finalized());
        assert!(!sample_parcel(ParcelStatus::OutForDelivery).is_finalized());
        assert!(sample_parcel(ParcelStatus::Delivered).is_finalized());
        assert!(sample_parcel(ParcelStatus::Return).is_finalized());
    }

    #[test]
    fn test_scan_type_serializes_as_type() {
        let scan = Scan {
            id: 1,
            parcel_id: 7,
            ts: Utc::now(),
            location: "Central hub".to_string(),
            scan_type: ParcelStatus::InTransit,
            note: None,
        };
        let json = serde_json::to_value(&scan).unwrap();
        assert_eq!(json["type"], "in_transit");
        assert!(json.get("scan_type").is_none());
    }

    #[test]
    fn test_customer_patch_defaults_to_no_changes() {
        let patch: CustomerPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.name.is_none());
        assert!(patch.phone.is_none());
    }

    #[test]
    fn test_parcel_draft_weight_defaults_to_zero() {
        let draft: ParcelDraft = serde_json::from_str(
            r#"{"customer_id": 3, "addr_from": "A", "addr_to": "B"}"#,
        )
        .unwrap();
        assert_eq!(draft.customer_id, 3);
        assert_eq!(draft.weight_kg, 0.0);
    }
}
