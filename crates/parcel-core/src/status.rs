//! # Parcel Status Machine
//!
//! The status machine is the single source of truth for scan legality.
//! Every parcel moves along a fixed physical-handling sequence:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Parcel Status Lifecycle                        │
//! │                                                                     │
//! │   new ──► pickup ──► in_transit ──► out_for_delivery ──► delivered  │
//! │                           │                   │              ▲      │
//! │                           │                   │          terminal   │
//! │                           ▼                   ▼                     │
//! │                         return ◄──────────────┘                     │
//! │                        terminal                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `delivered` and `return` accept no further scans, ever. Because each scan
//! records the status it moved the parcel into, the current status is always
//! re-derivable from the scan history alone - [`replay_status`] folds a scan
//! sequence through the same table and must agree with the stored status.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Parcel Status
// =============================================================================

/// The handling status of a parcel.
///
/// Doubles as the scan type: a scan's type is the status it moved the
/// parcel into. Stored in SQLite and serialized on the wire in snake_case
/// (`in_transit`, `out_for_delivery`, ...).
///
/// `Ord` follows lifecycle order so report output iterates
/// deterministically from `new` to `return`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum ParcelStatus {
    /// Created, not yet picked up. Every parcel starts here.
    New,
    /// Collected from the sender.
    Pickup,
    /// Moving between facilities.
    InTransit,
    /// On a courier vehicle for final delivery.
    OutForDelivery,
    /// Handed to the recipient. Terminal.
    Delivered,
    /// Sent back to the origin. Terminal.
    Return,
}

impl ParcelStatus {
    /// Every status, in lifecycle order.
    ///
    /// Reports iterate this to zero-fill their counts, so the set of keys a
    /// consumer sees never depends on which parcels happen to exist.
    pub const ALL: [ParcelStatus; 6] = [
        ParcelStatus::New,
        ParcelStatus::Pickup,
        ParcelStatus::InTransit,
        ParcelStatus::OutForDelivery,
        ParcelStatus::Delivered,
        ParcelStatus::Return,
    ];

    /// The snake_case form used in the database, on the wire, and in
    /// error messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ParcelStatus::New => "new",
            ParcelStatus::Pickup => "pickup",
            ParcelStatus::InTransit => "in_transit",
            ParcelStatus::OutForDelivery => "out_for_delivery",
            ParcelStatus::Delivered => "delivered",
            ParcelStatus::Return => "return",
        }
    }

    /// The transition table: which statuses a parcel in this status may
    /// move to next.
    ///
    /// This table is the ONLY place transition legality is defined. The
    /// ledger, the tests, and [`replay_status`] all consult it.
    pub const fn allowed_transitions(&self) -> &'static [ParcelStatus] {
        match self {
            ParcelStatus::New => &[ParcelStatus::Pickup],
            ParcelStatus::Pickup => &[ParcelStatus::InTransit],
            ParcelStatus::InTransit => &[ParcelStatus::OutForDelivery, ParcelStatus::Return],
            ParcelStatus::OutForDelivery => &[ParcelStatus::Delivered, ParcelStatus::Return],
            ParcelStatus::Delivered => &[],
            ParcelStatus::Return => &[],
        }
    }

    /// Whether this status accepts no further scans.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, ParcelStatus::Delivered | ParcelStatus::Return)
    }

    /// Whether a single step from this status to `next` is allowed.
    pub fn can_transition_to(&self, next: ParcelStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }
}

impl Default for ParcelStatus {
    fn default() -> Self {
        ParcelStatus::New
    }
}

impl std::fmt::Display for ParcelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Transition Validation
// =============================================================================

/// Checks that a parcel currently in `current` may accept a scan of type
/// `requested`.
///
/// ## Returns
/// - `Err(CoreError::TerminalState)` when `current` is terminal; terminal
///   parcels accept no scans at all, whatever is requested.
/// - `Err(CoreError::IllegalTransition)` when the table has no
///   `current -> requested` edge. The error names both statuses.
/// - `Ok(())` otherwise.
pub fn validate_transition(current: ParcelStatus, requested: ParcelStatus) -> CoreResult<()> {
    if current.is_terminal() {
        return Err(CoreError::TerminalState { current });
    }

    if !current.can_transition_to(requested) {
        return Err(CoreError::IllegalTransition {
            from: current,
            to: requested,
        });
    }

    Ok(())
}

/// Replays a scan-type sequence through the transition table, starting from
/// `new`, and returns the status it lands on.
///
/// A parcel's stored status must always equal the replay of its ledger, so
/// this is the consistency check for persisted data: any divergence means
/// a scan was written without the table's blessing.
pub fn replay_status<I>(scan_types: I) -> CoreResult<ParcelStatus>
where
    I: IntoIterator<Item = ParcelStatus>,
{
    let mut status = ParcelStatus::New;
    for scan_type in scan_types {
        validate_transition(status, scan_type)?;
        status = scan_type;
    }
    Ok(status)
}

// =============================================================================
// Unit Tests
// =============================================================================
