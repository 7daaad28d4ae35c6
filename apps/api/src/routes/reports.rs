//! # Report API
//!
//! Status-count aggregation over a creation-date window.

use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use parcel_core::{ParcelStatus, ReportRange};

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the status report.
///
/// Both dates are `YYYY-MM-DD`. They are optional at the deserializer
/// so a missing one reaches the range parser and fails with the same
/// 400 as a malformed one.
#[derive(Debug, Deserialize, Default)]
pub struct ReportParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Build the reports router.
pub fn router() -> Router<AppState> {
    Router::new().route("/reports/parcels-by-status", get(parcels_by_status))
}

/// GET /reports/parcels-by-status?from=YYYY-MM-DD&to=YYYY-MM-DD
///
/// Counts parcels created inside the window, grouped by current status.
/// Every status key is present, zero or not, and the window includes the
/// whole `to` day. 400 on a malformed or inverted range.
async fn parcels_by_status(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> Result<Json<BTreeMap<ParcelStatus, i64>>, ApiError> {
    let range = ReportRange::parse(
        params.from.as_deref().unwrap_or(""),
        params.to.as_deref().unwrap_or(""),
    )?;

    let counts = state.db.reports().count_by_status(&range).await?;
    Ok(Json(counts))
}
