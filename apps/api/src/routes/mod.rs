//! # HTTP Route Modules
//!
//! One module per resource, each exporting a `router()` that the app
//! merges into the full surface.
//!
//! ## Route Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          HTTP Surface                               │
//! │                                                                     │
//! │  health     GET  /health                                            │
//! │                                                                     │
//! │  customers  POST   /customers              create (201)             │
//! │             GET    /customers              list (search/page/sort)  │
//! │             GET    /customers/:id          fetch (200/404)          │
//! │             PUT    /customers/:id          partial update (200/404) │
//! │             DELETE /customers/:id          delete (204/404)         │
//! │                                                                     │
//! │  parcels    POST   /parcels                create (201/404)         │
//! │             GET    /parcels                list (search/page/sort)  │
//! │             GET    /parcels/:tracking_code fetch (200/404)          │
//! │                                                                     │
//! │  scans      POST   /parcels/:tracking_code/scans  record (201/409)  │
//! │             GET    /parcels/:tracking_code/scans  timeline          │
//! │                                                                     │
//! │  reports    GET    /reports/parcels-by-status     counts (200/400)  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Deserialize;

use crate::error::ApiError;

pub mod customers;
pub mod health;
pub mod parcels;
pub mod reports;
pub mod scans;

// =============================================================================
// Shared Query Parameters
// =============================================================================

/// Query parameters shared by the customer and parcel listings.
///
/// All fields are optional; the endpoints fill in their own defaults
/// (sort `created_at,desc`, page 1, endpoint page size).
#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
    /// Case-insensitive substring filter.
    pub search: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Page size, clamped to the endpoint maximum.
    pub size: Option<u32>,
    /// `field,direction` sort parameter.
    pub sort: Option<String>,
}

// =============================================================================
// JSON Extraction
// =============================================================================

/// Unwraps a JSON body, turning deserialization rejections into 422s.
///
/// Without this, axum's default rejection responses bypass the JSON error
/// body shape the rest of the surface uses.
pub(crate) fn extract_json<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(ApiError::Validation(rejection.body_text())),
    }
}
