//! # parcel-core: Pure Domain Logic for the Parcel Tracker
//!
//! This crate is the **heart** of the parcel tracker. It contains all domain
//! rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Parcel Tracker Architecture                     │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                     HTTP API (apps/api)                       │ │
//! │  │   POST /parcels/:code/scans ── GET /reports ── customer CRUD  │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │              ★ parcel-core (THIS CRATE) ★                     │ │
//! │  │                                                               │ │
//! │  │  ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐ │ │
//! │  │  │  status  │ │  codes   │ │  types   │ │ listing / range  │ │ │
//! │  │  │ machine  │ │ PRC-...  │ │  Parcel  │ │ sort, page, date │ │ │
//! │  │  │  table   │ │ formats  │ │   Scan   │ │     parsing      │ │ │
//! │  │  └──────────┘ └──────────┘ └──────────┘ └──────────────────┘ │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │                 parcel-db (Database Layer)                    │ │
//! │  │      SQLite queries, migrations, scan ledger, reports         │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`status`] - Parcel status machine and its transition table
//! - [`codes`] - Tracking-code formatting (`PRC-<year>-<seq>`)
//! - [`clock`] - Injected time capability (no hidden globals)
//! - [`types`] - Domain types (Customer, Parcel, Scan, drafts)
//! - [`listing`] - Sort/pagination parameter parsing
//! - [`range`] - Report date-range parsing
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Injected Time**: The current year/instant always comes in through [`clock::Clock`]
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use parcel_core::codes::build_tracking_code;
//! use parcel_core::ParcelStatus;
//!
//! // Codes are a pure function of year and sequence
//! assert_eq!(build_tracking_code(2025, 1), "PRC-2025-000001");
//!
//! // The transition table answers every legality question
//! assert!(ParcelStatus::New.can_transition_to(ParcelStatus::Pickup));
//! assert!(ParcelStatus::Delivered.is_terminal());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod clock;
pub mod codes;
pub mod error;
pub mod listing;
pub mod range;
pub mod status;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use parcel_core::ParcelStatus` instead of
// `use parcel_core::status::ParcelStatus`

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CoreError, CoreResult, ValidationError};
pub use range::ReportRange;
pub use status::ParcelStatus;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a customer name.
///
/// ## Business Reason
/// Matches the column width of `customers.name`; anything longer is a
/// data-entry mistake, not a real name.
pub const MAX_CUSTOMER_NAME_LEN: usize = 80;

/// Maximum length of a customer phone number.
pub const MAX_PHONE_LEN: usize = 32;

/// Maximum length of an origin or destination address line.
pub const MAX_ADDRESS_LEN: usize = 200;

/// Maximum length of a scan location string.
pub const MAX_LOCATION_LEN: usize = 120;

/// Maximum length of a scan note.
pub const MAX_NOTE_LEN: usize = 200;
