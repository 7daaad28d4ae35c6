//! # Integration Tests for parcel-api
//!
//! Drives the full router in-process with `tower::ServiceExt::oneshot`:
//! customer CRUD, parcel creation and lookup, the scan write path with
//! its 409s, timeline listing, reports, and the error body shape.
//!
//! Every test gets a fresh in-memory database and a clock pinned to
//! 2025-03-10, so tracking codes and report windows are deterministic.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use parcel_api::state::AppState;
use parcel_core::FixedClock;
use parcel_db::{Database, DbConfig};

/// Helper: build the test app over a fresh in-memory database.
async fn test_app() -> axum::Router {
    let db = Database::new(DbConfig::in_memory())
        .await
        .expect("in-memory database");
    let state = AppState::with_clock(db, Arc::new(FixedClock::on_date(2025, 3, 10)));
    parcel_api::app(state)
}

/// Helper: read response body as JSON.
async fn body_json(response: axum::http::Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Helper: create a customer, returning its id.
async fn create_customer(app: &axum::Router, name: &str) -> i64 {
    let response = app
        .clone()
        .oneshot(post_json(
            "/customers",
            json!({"name": name, "phone": "+1 555 0100"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Helper: create a parcel for a customer, returning its tracking code.
async fn create_parcel(app: &axum::Router, customer_id: i64) -> String {
    let response = app
        .clone()
        .oneshot(post_json(
            "/parcels",
            json!({
                "customer_id": customer_id,
                "weight_kg": 1.5,
                "addr_from": "North depot, 1 Dock Rd",
                "addr_to": "12 Harbor St"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["tracking_code"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Helper: record a scan, returning the raw response.
async fn record_scan(
    app: &axum::Router,
    code: &str,
    scan_type: &str,
    ts: &str,
    location: &str,
) -> axum::http::Response<Body> {
    app.clone()
        .oneshot(post_json(
            &format!("/parcels/{code}/scans"),
            json!({"type": scan_type, "ts": ts, "location": location}),
        ))
        .await
        .unwrap()
}

// -- Health -------------------------------------------------------------------

#[tokio::test]
async fn test_health_returns_ok() {
    let app = test_app().await;
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

// -- Customers ----------------------------------------------------------------

#[tokio::test]
async fn test_create_customer_returns_201() {
    let app = test_app().await;
    let response = app
        .oneshot(post_json(
            "/customers",
            json!({"name": "Acme Retail", "phone": "+1 555 0100"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let customer = body_json(response).await;
    assert_eq!(customer["id"], 1);
    assert_eq!(customer["name"], "Acme Retail");
    assert_eq!(customer["phone"], "+1 555 0100");
    assert!(customer["created_at"].is_string());
}

#[tokio::test]
async fn test_create_customer_without_phone() {
    let app = test_app().await;
    let response = app
        .oneshot(post_json("/customers", json!({"name": "Casa Verde"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let customer = body_json(response).await;
    assert!(customer["phone"].is_null());
}

#[tokio::test]
async fn test_create_customer_blank_name_returns_422() {
    let app = test_app().await;
    let response = app
        .oneshot(post_json("/customers", json!({"name": "   "})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION");
    assert_eq!(body["error"]["message"], "name is required");
}

#[tokio::test]
async fn test_create_customer_malformed_json_returns_422() {
    let app = test_app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/customers")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"name": "#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION");
}

#[tokio::test]
async fn test_get_customer_not_found_returns_404() {
    let app = test_app().await;
    let response = app.oneshot(get("/customers/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "customer not found");
}

#[tokio::test]
async fn test_customer_crud_lifecycle() {
    let app = test_app().await;
    let id = create_customer(&app, "Blue Logistics").await;

    // Fetch it back
    let response = app
        .clone()
        .oneshot(get(&format!("/customers/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let customer = body_json(response).await;
    assert_eq!(customer["name"], "Blue Logistics");

    // Partial update: phone only, name untouched
    let response = app
        .clone()
        .oneshot(put_json(
            &format!("/customers/{id}"),
            json!({"phone": "+92 300 1112223"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["name"], "Blue Logistics");
    assert_eq!(updated["phone"], "+92 300 1112223");

    // Delete, then the fetch is a 404
    let response = app
        .clone()
        .oneshot(delete(&format!("/customers/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(get(&format!("/customers/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_customer_blank_name_returns_422() {
    let app = test_app().await;
    let id = create_customer(&app, "Acme Retail").await;

    let response = app
        .oneshot(put_json(&format!("/customers/{id}"), json!({"name": ""})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_delete_customer_not_found_returns_404() {
    let app = test_app().await;
    let response = app.oneshot(delete("/customers/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_customers_search_and_sort() {
    let app = test_app().await;
    create_customer(&app, "Acme Retail").await;
    create_customer(&app, "Blue Logistics").await;
    create_customer(&app, "Acme Wholesale").await;

    // Case-insensitive substring search
    let response = app
        .clone()
        .oneshot(get("/customers?search=acme&sort=name,asc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let customers = body_json(response).await;
    let names: Vec<&str> = customers
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Acme Retail", "Acme Wholesale"]);

    // No filter returns everyone
    let response = app.oneshot(get("/customers")).await.unwrap();
    let customers = body_json(response).await;
    assert_eq!(customers.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_customers_pagination() {
    let app = test_app().await;
    for i in 1..=5 {
        create_customer(&app, &format!("Customer {i:02}")).await;
    }

    let response = app
        .oneshot(get("/customers?sort=id,asc&page=2&size=2"))
        .await
        .unwrap();
    let customers = body_json(response).await;
    let ids: Vec<i64> = customers
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 4]);
}

// -- Parcels ------------------------------------------------------------------

#[tokio::test]
async fn test_create_parcel_returns_201_with_tracking_code() {
    let app = test_app().await;
    let customer_id = create_customer(&app, "Acme Retail").await;

    let response = app
        .oneshot(post_json(
            "/parcels",
            json!({
                "customer_id": customer_id,
                "weight_kg": 2.5,
                "addr_from": "North depot",
                "addr_to": "12 Harbor St"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let parcel = body_json(response).await;
    // Clock is pinned to 2025; first parcel id is 1
    assert_eq!(parcel["tracking_code"], "PRC-2025-000001");
    assert_eq!(parcel["status"], "new");
    assert_eq!(parcel["customer_id"], customer_id);
    assert_eq!(parcel["weight_kg"], 2.5);
    assert!(parcel["delivered_at"].is_null());
}

#[tokio::test]
async fn test_tracking_codes_follow_parcel_ids() {
    let app = test_app().await;
    let customer_id = create_customer(&app, "Acme Retail").await;

    assert_eq!(create_parcel(&app, customer_id).await, "PRC-2025-000001");
    assert_eq!(create_parcel(&app, customer_id).await, "PRC-2025-000002");
    assert_eq!(create_parcel(&app, customer_id).await, "PRC-2025-000003");
}

#[tokio::test]
async fn test_create_parcel_unknown_customer_returns_404() {
    let app = test_app().await;
    let response = app
        .oneshot(post_json(
            "/parcels",
            json!({
                "customer_id": 77,
                "weight_kg": 1.0,
                "addr_from": "A",
                "addr_to": "B"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "customer not found");
}

#[tokio::test]
async fn test_create_parcel_negative_weight_returns_422() {
    let app = test_app().await;
    let customer_id = create_customer(&app, "Acme Retail").await;

    let response = app
        .oneshot(post_json(
            "/parcels",
            json!({
                "customer_id": customer_id,
                "weight_kg": -0.5,
                "addr_from": "A",
                "addr_to": "B"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION");
    assert_eq!(body["error"]["message"], "weight_kg must not be negative");
}

#[tokio::test]
async fn test_get_parcel_by_tracking_code() {
    let app = test_app().await;
    let customer_id = create_customer(&app, "Acme Retail").await;
    let code = create_parcel(&app, customer_id).await;

    let response = app
        .clone()
        .oneshot(get(&format!("/parcels/{code}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let parcel = body_json(response).await;
    assert_eq!(parcel["tracking_code"], code);

    let response = app.oneshot(get("/parcels/PRC-2025-999999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "parcel not found");
}

#[tokio::test]
async fn test_list_parcels_by_owner_name() {
    let app = test_app().await;
    let acme = create_customer(&app, "Acme Retail").await;
    let blue = create_customer(&app, "Blue Logistics").await;
    create_parcel(&app, acme).await;
    create_parcel(&app, acme).await;
    create_parcel(&app, blue).await;

    let response = app
        .clone()
        .oneshot(get("/parcels?search=acme"))
        .await
        .unwrap();
    let parcels = body_json(response).await;
    assert_eq!(parcels.as_array().unwrap().len(), 2);
    for parcel in parcels.as_array().unwrap() {
        assert_eq!(parcel["customer_id"].as_i64().unwrap(), acme);
    }

    let response = app.oneshot(get("/parcels")).await.unwrap();
    let parcels = body_json(response).await;
    assert_eq!(parcels.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_delete_customer_cascades_to_parcels() {
    let app = test_app().await;
    let customer_id = create_customer(&app, "Acme Retail").await;
    let code = create_parcel(&app, customer_id).await;

    let response = app
        .clone()
        .oneshot(delete(&format!("/customers/{customer_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get(&format!("/parcels/{code}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// -- Scans --------------------------------------------------------------------

#[tokio::test]
async fn test_record_scan_returns_201_and_updates_status() {
    let app = test_app().await;
    let customer_id = create_customer(&app, "Acme Retail").await;
    let code = create_parcel(&app, customer_id).await;

    let response = record_scan(&app, &code, "pickup", "2025-03-10T13:00:00Z", "North depot").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let scan = body_json(response).await;
    assert_eq!(scan["type"], "pickup");
    assert_eq!(scan["location"], "North depot");
    assert!(scan["note"].is_null());

    let response = app.oneshot(get(&format!("/parcels/{code}"))).await.unwrap();
    let parcel = body_json(response).await;
    assert_eq!(parcel["status"], "pickup");
}

#[tokio::test]
async fn test_scan_carries_note() {
    let app = test_app().await;
    let customer_id = create_customer(&app, "Acme Retail").await;
    let code = create_parcel(&app, customer_id).await;

    let response = app
        .oneshot(post_json(
            &format!("/parcels/{code}/scans"),
            json!({
                "type": "pickup",
                "ts": "2025-03-10T13:00:00Z",
                "location": "North depot",
                "note": "fragile, keep upright"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let scan = body_json(response).await;
    assert_eq!(scan["note"], "fragile, keep upright");
}

#[tokio::test]
async fn test_scan_unknown_parcel_returns_404() {
    let app = test_app().await;
    let response = record_scan(
        &app,
        "PRC-2025-000042",
        "pickup",
        "2025-03-10T13:00:00Z",
        "North depot",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "parcel not found");
}

#[tokio::test]
async fn test_illegal_transition_returns_409() {
    let app = test_app().await;
    let customer_id = create_customer(&app, "Acme Retail").await;
    let code = create_parcel(&app, customer_id).await;

    // Parcels cannot skip straight from new to delivered
    let response =
        record_scan(&app, &code, "delivered", "2025-03-10T13:00:00Z", "12 Harbor St").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "CONFLICT");
    assert_eq!(
        body["error"]["message"],
        "illegal status transition: new -> delivered"
    );

    // The failed scan left nothing behind
    let response = app
        .clone()
        .oneshot(get(&format!("/parcels/{code}/scans")))
        .await
        .unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 0);

    let response = app.oneshot(get(&format!("/parcels/{code}"))).await.unwrap();
    assert_eq!(body_json(response).await["status"], "new");
}

#[tokio::test]
async fn test_terminal_parcel_returns_409() {
    let app = test_app().await;
    let customer_id = create_customer(&app, "Acme Retail").await;
    let code = create_parcel(&app, customer_id).await;

    record_scan(&app, &code, "pickup", "2025-03-10T13:00:00Z", "North depot").await;
    record_scan(&app, &code, "in_transit", "2025-03-10T14:00:00Z", "Central hub").await;
    record_scan(&app, &code, "return", "2025-03-10T15:00:00Z", "Central hub").await;

    // Terminal: no scan of any type is accepted
    let response =
        record_scan(&app, &code, "pickup", "2025-03-10T16:00:00Z", "North depot").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "CONFLICT");
    assert_eq!(
        body["error"]["message"],
        "parcel is finalized, scans are not allowed"
    );
}

#[tokio::test]
async fn test_scan_blank_location_returns_422() {
    let app = test_app().await;
    let customer_id = create_customer(&app, "Acme Retail").await;
    let code = create_parcel(&app, customer_id).await;

    let response = record_scan(&app, &code, "pickup", "2025-03-10T13:00:00Z", "  ").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION");
    assert_eq!(body["error"]["message"], "location is required");
}

#[tokio::test]
async fn test_scan_unknown_type_returns_422() {
    let app = test_app().await;
    let customer_id = create_customer(&app, "Acme Retail").await;
    let code = create_parcel(&app, customer_id).await;

    let response = record_scan(&app, &code, "teleported", "2025-03-10T13:00:00Z", "Hub").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_scan_list_sorted_and_paginated() {
    let app = test_app().await;
    let customer_id = create_customer(&app, "Acme Retail").await;
    let code = create_parcel(&app, customer_id).await;

    record_scan(&app, &code, "pickup", "2025-03-10T13:00:00Z", "North depot").await;
    record_scan(&app, &code, "in_transit", "2025-03-10T14:00:00Z", "Central hub").await;
    record_scan(&app, &code, "out_for_delivery", "2025-03-10T15:00:00Z", "East station").await;
    record_scan(&app, &code, "delivered", "2025-03-10T16:00:00Z", "12 Harbor St").await;

    // Default order is oldest first
    let response = app
        .clone()
        .oneshot(get(&format!("/parcels/{code}/scans")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let scans = body_json(response).await;
    let types: Vec<&str> = scans
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, vec!["pickup", "in_transit", "out_for_delivery", "delivered"]);

    // Newest first on request
    let response = app
        .clone()
        .oneshot(get(&format!("/parcels/{code}/scans?sort=ts,desc")))
        .await
        .unwrap();
    let scans = body_json(response).await;
    assert_eq!(scans.as_array().unwrap()[0]["type"], "delivered");

    // Second page of two
    let response = app
        .oneshot(get(&format!("/parcels/{code}/scans?size=2&page=2")))
        .await
        .unwrap();
    let scans = body_json(response).await;
    let types: Vec<&str> = scans
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, vec!["out_for_delivery", "delivered"]);
}

#[tokio::test]
async fn test_scan_list_unknown_parcel_returns_404() {
    let app = test_app().await;
    let response = app
        .oneshot(get("/parcels/PRC-2025-000042/scans"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// -- Full Lifecycle -----------------------------------------------------------

#[tokio::test]
async fn test_full_delivery_lifecycle() {
    let app = test_app().await;
    let customer_id = create_customer(&app, "Acme Retail").await;
    let code = create_parcel(&app, customer_id).await;

    let legs = [
        ("pickup", "2025-03-10T13:00:00Z", "North depot"),
        ("in_transit", "2025-03-10T14:00:00Z", "Central hub"),
        ("out_for_delivery", "2025-03-10T15:00:00Z", "East station"),
        ("delivered", "2025-03-10T16:00:00Z", "12 Harbor St"),
    ];
    for (scan_type, ts, location) in legs {
        let response = record_scan(&app, &code, scan_type, ts, location).await;
        assert_eq!(response.status(), StatusCode::CREATED, "leg {scan_type}");
    }

    // Final state: delivered, stamped with the delivery scan's timestamp
    let response = app
        .clone()
        .oneshot(get(&format!("/parcels/{code}")))
        .await
        .unwrap();
    let parcel = body_json(response).await;
    assert_eq!(parcel["status"], "delivered");

    let delivered_at: DateTime<Utc> =
        serde_json::from_value(parcel["delivered_at"].clone()).unwrap();
    let expected: DateTime<Utc> = "2025-03-10T16:00:00Z".parse().unwrap();
    assert_eq!(delivered_at, expected);

    // Finalized parcels accept nothing further
    let response =
        record_scan(&app, &code, "pickup", "2025-03-10T17:00:00Z", "North depot").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Exactly the four legs are on record
    let response = app
        .oneshot(get(&format!("/parcels/{code}/scans")))
        .await
        .unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 4);
}

// -- Reports ------------------------------------------------------------------

#[tokio::test]
async fn test_report_counts_by_status() {
    let app = test_app().await;
    let customer_id = create_customer(&app, "Acme Retail").await;
    let code = create_parcel(&app, customer_id).await;
    create_parcel(&app, customer_id).await;

    record_scan(&app, &code, "pickup", "2025-03-10T13:00:00Z", "North depot").await;

    let response = app
        .oneshot(get(
            "/reports/parcels-by-status?from=2025-03-01&to=2025-03-31",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let counts = body_json(response).await;
    assert_eq!(counts["new"], 1);
    assert_eq!(counts["pickup"], 1);
    assert_eq!(counts["in_transit"], 0);
    assert_eq!(counts["out_for_delivery"], 0);
    assert_eq!(counts["delivered"], 0);
    assert_eq!(counts["return"], 0);
    assert_eq!(counts.as_object().unwrap().len(), 6);
}

#[tokio::test]
async fn test_report_empty_window_has_all_six_keys() {
    let app = test_app().await;
    let response = app
        .oneshot(get(
            "/reports/parcels-by-status?from=2024-01-01&to=2024-01-31",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let counts = body_json(response).await;
    assert_eq!(counts.as_object().unwrap().len(), 6);
    for (_, count) in counts.as_object().unwrap() {
        assert_eq!(count.as_i64().unwrap(), 0);
    }
}

#[tokio::test]
async fn test_report_bad_date_returns_400() {
    let app = test_app().await;
    let response = app
        .oneshot(get(
            "/reports/parcels-by-status?from=2025-13-99&to=2025-03-31",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_RANGE");
    assert_eq!(
        body["error"]["message"],
        "invalid date format, expected YYYY-MM-DD"
    );
}

#[tokio::test]
async fn test_report_inverted_range_returns_400() {
    let app = test_app().await;
    let response = app
        .oneshot(get(
            "/reports/parcels-by-status?from=2025-04-01&to=2025-03-01",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_RANGE");
    assert_eq!(body["error"]["message"], "from must be <= to");
}

#[tokio::test]
async fn test_report_missing_params_returns_400() {
    let app = test_app().await;
    let response = app.oneshot(get("/reports/parcels-by-status")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_RANGE");
}
