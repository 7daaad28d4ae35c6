//! # Customer CRUD API
//!
//! Plain persistence operations over customers. The only business rule
//! here is existence (404 when missing); everything else is field
//! validation and delegation to the repository.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use parcel_core::listing::{Page, SortSpec, CUSTOMER_SORT_FIELDS, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use parcel_core::validation::{validate_customer_draft, validate_customer_patch};
use parcel_core::{Customer, CustomerDraft, CustomerPatch};

use crate::error::ApiError;
use crate::routes::{extract_json, ListParams};
use crate::state::AppState;

/// Build the customers router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route(
            "/customers/:id",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}

/// POST /customers
///
/// Creates a customer from a validated draft. 201 with the stored row.
async fn create_customer(
    State(state): State<AppState>,
    body: Result<Json<CustomerDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let draft = extract_json(body)?;
    validate_customer_draft(&draft)?;

    let customer = state.db.customers().create(&draft).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /customers
///
/// Lists customers with optional name search, sorted and paginated.
/// Defaults: sort `created_at,desc`, page 1, 20 per page.
async fn list_customers(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    let sort = SortSpec::parse(
        params.sort.as_deref().unwrap_or(""),
        CUSTOMER_SORT_FIELDS,
        "created_at",
    );
    let page = Page::clamp(params.page, params.size, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);

    let customers = state
        .db
        .customers()
        .list(params.search.as_deref(), sort, page)
        .await?;
    Ok(Json(customers))
}

/// GET /customers/:id
async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Customer>, ApiError> {
    let customer = state.db.customers().find_by_id(id).await?;
    Ok(Json(customer))
}

/// PUT /customers/:id
///
/// Partial update: absent fields keep their stored values.
async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<CustomerPatch>, JsonRejection>,
) -> Result<Json<Customer>, ApiError> {
    let patch = extract_json(body)?;
    validate_customer_patch(&patch)?;

    let customer = state.db.customers().update(id, &patch).await?;
    Ok(Json(customer))
}

/// DELETE /customers/:id
///
/// Cascades to the customer's parcels and their scans. 204 on success.
async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.db.customers().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
