//! HTTP-level integration tests for the `/passenger` API endpoints.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the
//! router, backed by the in-memory document store through the
//! `DocumentStore` seam.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json, put_json};
use serde_json::json;

/// The minimal valid creation payload used across tests.
fn jane() -> serde_json::Value {
    json!({
        "title": "Mr",
        "given_name": "Jane",
        "surname": "Doe",
        "email": "jane@example.com",
        "mobile": "+10000000000"
    })
}

/// Create a passenger and return the response body.
async fn create_jane(app: &axum::Router) -> serde_json::Value {
    let response = post_json(app.clone(), "/passenger/create", jane()).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Test: GET / returns the welcome message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn welcome_route_returns_message() {
    let app = build_test_app();
    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Welcome to the Passenger API!");
}

// ---------------------------------------------------------------------------
// Test: GET /health reports a healthy store
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_route_reports_ok() {
    let app = build_test_app();
    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}

// ---------------------------------------------------------------------------
// Test: POST /passenger/create returns the record with a generated id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_record_with_generated_id() {
    let app = build_test_app();
    let created = create_jane(&app).await;

    assert!(
        !created["id"].as_str().unwrap().is_empty(),
        "id should be generated by the store"
    );
    assert_eq!(created["title"], "Mr");
    assert_eq!(created["given_name"], "Jane");
    assert_eq!(created["surname"], "Doe");
    assert_eq!(created["email"], "jane@example.com");
    assert_eq!(created["mobile"], "+10000000000");
    // Optional fields are absent (null) until set.
    assert!(created["passport_number"].is_null());
    assert!(created["meal_preference"].is_null());
}

// ---------------------------------------------------------------------------
// Test: create encodes calendar dates as ISO strings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_encodes_dates_as_iso_strings() {
    let app = build_test_app();
    let mut input = jane();
    input["date_of_birth"] = json!("1990-05-01");
    input["date_of_expiration"] = json!("2030-12-31");

    let response = post_json(app, "/passenger/create", input).await;
    assert_eq!(response.status(), StatusCode::OK);

    let created = body_json(response).await;
    assert_eq!(created["date_of_birth"], "1990-05-01");
    assert_eq!(created["date_of_expiration"], "2030-12-31");
}

// ---------------------------------------------------------------------------
// Test: create rejects a malformed email with 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_rejects_invalid_email() {
    let app = build_test_app();
    let mut input = jane();
    input["email"] = json!("not-an-email");

    let response = post_json(app, "/passenger/create", input).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: create rejects an empty required field with 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_rejects_empty_required_field() {
    let app = build_test_app();
    let mut input = jane();
    input["surname"] = json!("");

    let response = post_json(app, "/passenger/create", input).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: create with a missing required field is rejected by the extractor
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_rejects_missing_required_field() {
    let app = build_test_app();
    let mut input = jane();
    input.as_object_mut().unwrap().remove("surname");

    let response = post_json(app, "/passenger/create", input).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Test: create with a malformed date is rejected by the extractor
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_rejects_malformed_date() {
    let app = build_test_app();
    let mut input = jane();
    input["date_of_birth"] = json!("01/05/1990");

    let response = post_json(app, "/passenger/create", input).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Test: GET /passenger/{id} returns the record just created
// ---------------------------------------------------------------------------

#[tokio::test]
async fn read_returns_created_record() {
    let app = build_test_app();
    let created = create_jane(&app).await;
    let id = created["id"].as_str().unwrap();

    let response = get(app, &format!("/passenger/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(response).await;
    assert_eq!(fetched, created);
}

// ---------------------------------------------------------------------------
// Test: GET on a never-issued id returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn read_unknown_id_returns_404() {
    let app = build_test_app();
    let response = get(app, "/passenger/00000000-0000-4000-8000-000000000000").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: GET with a malformed id returns 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn read_malformed_id_returns_400() {
    let app = build_test_app();
    let response = get(app, "/passenger/not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Test: PUT merges supplied fields and preserves the rest
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_merges_supplied_fields() {
    let app = build_test_app();
    let created = create_jane(&app).await;
    let id = created["id"].as_str().unwrap();

    let response = put_json(
        app.clone(),
        &format!("/passenger/{id}/update"),
        json!({ "meal_preference": "vegan" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["meal_preference"], "vegan");
    assert_eq!(updated["surname"], "Doe");
    assert_eq!(updated["email"], "jane@example.com");
    assert_eq!(updated["id"], created["id"]);
}

// ---------------------------------------------------------------------------
// Test: PUT with an explicit null clears an optional field
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_with_null_clears_optional_field() {
    let app = build_test_app();
    let mut input = jane();
    input["passport_number"] = json!("X1234567");
    let response = post_json(app.clone(), "/passenger/create", input).await;
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap();
    assert_eq!(created["passport_number"], "X1234567");

    let response = put_json(
        app.clone(),
        &format!("/passenger/{id}/update"),
        json!({ "passport_number": null }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert!(updated["passport_number"].is_null());
    // The rest of the record is untouched.
    assert_eq!(updated["surname"], "Doe");
}

// ---------------------------------------------------------------------------
// Test: PUT with an empty body round-trips the record unchanged
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_with_no_fields_roundtrips_record() {
    let app = build_test_app();
    let created = create_jane(&app).await;
    let id = created["id"].as_str().unwrap();

    let response = put_json(app.clone(), &format!("/passenger/{id}/update"), json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);

    let response = get(app, &format!("/passenger/{id}")).await;
    assert_eq!(body_json(response).await, created);
}

// ---------------------------------------------------------------------------
// Test: PUT on a never-issued id returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_unknown_id_returns_404() {
    let app = build_test_app();
    let response = put_json(
        app,
        "/passenger/00000000-0000-4000-8000-000000000000/update",
        json!({ "meal_preference": "vegan" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: PUT rejects a malformed supplied email with 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_rejects_invalid_email() {
    let app = build_test_app();
    let created = create_jane(&app).await;
    let id = created["id"].as_str().unwrap();

    let response = put_json(
        app,
        &format!("/passenger/{id}/update"),
        json!({ "email": "nope" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: PUT rejects an empty supplied required field with 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_rejects_empty_required_field() {
    let app = build_test_app();
    let created = create_jane(&app).await;
    let id = created["id"].as_str().unwrap();

    let response = put_json(app, &format!("/passenger/{id}/update"), json!({ "title": "" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: DELETE confirms, then read and repeat delete return 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_then_read_returns_404() {
    let app = build_test_app();
    let created = create_jane(&app).await;
    let id = created["id"].as_str().unwrap();

    let response = delete(app.clone(), &format!("/passenger/{id}/delete")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Passenger deleted successfully");

    let response = get(app.clone(), &format!("/passenger/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Deleting an already-deleted record is a clean 404, not a crash.
    let response = delete(app, &format!("/passenger/{id}/delete")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: DELETE with a malformed id returns 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_malformed_id_returns_400() {
    let app = build_test_app();
    let response = delete(app, "/passenger/not-a-uuid/delete").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
