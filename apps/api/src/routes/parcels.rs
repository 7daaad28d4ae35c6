//! # Parcel API
//!
//! Parcel creation and lookup. Parcels always start as `new` with a
//! freshly assigned tracking code; status changes only ever arrive
//! through the scan endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use parcel_core::listing::{Page, SortSpec, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PARCEL_SORT_FIELDS};
use parcel_core::validation::validate_parcel_draft;
use parcel_core::{Parcel, ParcelDraft};

use crate::error::ApiError;
use crate::routes::{extract_json, ListParams};
use crate::state::AppState;

/// Build the parcels router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/parcels", get(list_parcels).post(create_parcel))
        .route("/parcels/:tracking_code", get(get_parcel))
}

/// POST /parcels
///
/// Creates a parcel for an existing customer. 201 with the stored row,
/// including its tracking code; 404 when the customer does not exist.
async fn create_parcel(
    State(state): State<AppState>,
    body: Result<Json<ParcelDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Parcel>), ApiError> {
    let draft = extract_json(body)?;
    validate_parcel_draft(&draft)?;

    let parcel = state
        .db
        .parcels()
        .create(state.clock.as_ref(), &draft)
        .await?;
    Ok((StatusCode::CREATED, Json(parcel)))
}

/// GET /parcels
///
/// Lists parcels with optional search on the owning customer's name.
/// Defaults: sort `created_at,desc`, page 1, 20 per page.
async fn list_parcels(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Parcel>>, ApiError> {
    let sort = SortSpec::parse(
        params.sort.as_deref().unwrap_or(""),
        PARCEL_SORT_FIELDS,
        "created_at",
    );
    let page = Page::clamp(params.page, params.size, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);

    let parcels = state
        .db
        .parcels()
        .list(params.search.as_deref(), sort, page)
        .await?;
    Ok(Json(parcels))
}

/// GET /parcels/:tracking_code
async fn get_parcel(
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
) -> Result<Json<Parcel>, ApiError> {
    let parcel = state.db.parcels().find_by_tracking_code(&tracking_code).await?;
    Ok(Json(parcel))
}
