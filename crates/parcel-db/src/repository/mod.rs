//! # Repository Modules
//!
//! Data access layer, one repository per aggregate.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Repository Layer                               │
//! │                                                                     │
//! │  HTTP Handlers                                                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐               │
//! │  │  Customer    │  │   Parcel     │  │    Scan      │               │
//! │  │  Repository  │  │  Repository  │  │  Repository  │               │
//! │  │              │  │              │  │  (read-only) │               │
//! │  │  - create    │  │  - create    │  │  - timeline  │               │
//! │  │  - find      │  │  - find      │  │  - count     │               │
//! │  │  - update    │  │  - list      │  └──────────────┘               │
//! │  │  - delete    │  └──────────────┘                                 │
//! │  │  - list      │                                                   │
//! │  └──────────────┘                                                   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SqlitePool (shared, cloned into each repository)                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Scans are only ever written through the [`crate::ledger::ScanLedger`],
//! which owns the status transition; `ScanRepository` stays read-only so no
//! code path can append a scan without moving the status with it.

pub mod customer;
pub mod parcel;
pub mod scan;

pub use customer::CustomerRepository;
pub use parcel::ParcelRepository;
pub use scan::ScanRepository;
