//! # Scan API
//!
//! The write path of the whole system: recording a scan is the only way
//! a parcel's status ever changes after creation. The handler validates
//! the free-text fields and hands the transition to the ledger, which
//! enforces the status machine inside one transaction.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use parcel_core::listing::{
    Page, SortSpec, SCAN_DEFAULT_PAGE_SIZE, SCAN_MAX_PAGE_SIZE, SCAN_SORT_FIELDS,
};
use parcel_core::validation::{validate_location, validate_note};
use parcel_core::{ParcelStatus, Scan};

use crate::error::ApiError;
use crate::routes::extract_json;
use crate::state::AppState;

/// Request body for recording a scan.
#[derive(Debug, Deserialize)]
pub struct ScanCreate {
    /// The status this scan moves the parcel into.
    #[serde(rename = "type")]
    pub scan_type: ParcelStatus,

    /// When the handling event happened.
    pub ts: DateTime<Utc>,

    /// Where the event happened.
    pub location: String,

    /// Optional handler note.
    #[serde(default)]
    pub note: Option<String>,
}

/// Query parameters for the scan timeline. Scans have no search filter;
/// the parcel in the path is the only scope.
#[derive(Debug, Deserialize, Default)]
pub struct ScanListParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Option<String>,
}

/// Build the scans router.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/parcels/:tracking_code/scans",
        get(list_scans).post(create_scan),
    )
}

/// POST /parcels/:tracking_code/scans
///
/// Records a handling scan and moves the parcel to the scan's status.
/// 201 with the stored scan; 404 unknown tracking code; 409 when the
/// transition is illegal, the parcel is finalized, or a concurrent scan
/// won the race.
async fn create_scan(
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
    body: Result<Json<ScanCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Scan>), ApiError> {
    let req = extract_json(body)?;
    validate_location(&req.location)?;
    validate_note(req.note.as_deref())?;

    let scan = state
        .db
        .ledger()
        .apply_transition(
            &tracking_code,
            req.scan_type,
            req.ts,
            &req.location,
            req.note.as_deref(),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(scan)))
}

/// GET /parcels/:tracking_code/scans
///
/// The parcel's scan timeline, oldest first by default. Defaults: sort
/// `ts,asc`, page 1, 50 per page.
async fn list_scans(
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
    Query(params): Query<ScanListParams>,
) -> Result<Json<Vec<Scan>>, ApiError> {
    // Resolve the code first so an unknown parcel is a 404, not an
    // empty list
    let parcel = state.db.parcels().find_by_tracking_code(&tracking_code).await?;

    let sort = SortSpec::parse(
        params.sort.as_deref().unwrap_or("ts,asc"),
        SCAN_SORT_FIELDS,
        "ts",
    );
    let page = Page::clamp(
        params.page,
        params.size,
        SCAN_DEFAULT_PAGE_SIZE,
        SCAN_MAX_PAGE_SIZE,
    );

    let scans = state
        .db
        .scans()
        .list_for_parcel(parcel.id, sort, page)
        .await?;
    Ok(Json(scans))
}
