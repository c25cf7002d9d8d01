//! Profile API Integration Tests
//!
//! Tests full HTTP request/response cycles for the five profile endpoints

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use profile_server::store::SqliteProfileStore;
use profile_server::{db, router, AppState};

async fn setup_test_app() -> axum::Router {
    let pool = db::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    let state = Arc::new(AppState::new(Arc::new(SqliteProfileStore::new(pool))));
    router(state)
}

async fn json_response(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.expect("Request failed");
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let value: Value = serde_json::from_slice(&body).expect("Invalid JSON response");
    (status, value)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn sample_profile() -> Value {
    json!({
        "name": "Ada",
        "phone": "555",
        "department": "0",
        "address": {
            "street": "1 Main St",
            "city": "C",
            "state": "",
            "zip": "12345",
            "country": "(None)"
        }
    })
}

async fn create(app: &axum::Router, body: Value) -> Value {
    let (status, body) = json_response(app, json_request("POST", "/profile", body)).await;
    assert_eq!(status, StatusCode::CREATED);
    body["profile"].clone()
}

#[tokio::test]
async fn test_list_profiles_empty() {
    let app = setup_test_app().await;

    let (status, body) = json_response(&app, empty_request("GET", "/profiles")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_profile_assigns_id() {
    let app = setup_test_app().await;

    let (status, body) =
        json_response(&app, json_request("POST", "/profile", sample_profile())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "profile created");
    assert_eq!(body["profile"]["name"], "Ada");
    assert_eq!(body["profile"]["address"]["city"], "C");
    assert_eq!(body["profile"]["id"].as_str().unwrap().len(), 36);
    assert!(body["profile"]["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_ignores_client_supplied_id() {
    let app = setup_test_app().await;
    let mut input = sample_profile();
    input["id"] = json!("chosen-by-client");

    let profile = create(&app, input).await;
    assert_ne!(profile["id"], "chosen-by-client");
}

#[tokio::test]
async fn test_create_missing_required_field_is_bad_request() {
    let app = setup_test_app().await;

    for missing in ["name", "phone", "department"] {
        let mut input = sample_profile();
        input.as_object_mut().unwrap().remove(missing);

        let (status, body) = json_response(&app, json_request("POST", "/profile", input)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "missing {missing}");
        assert!(body["error"].is_string());
    }

    let (_, list) = json_response(&app, empty_request("GET", "/profiles")).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_create_malformed_body_is_bad_request() {
    let app = setup_test_app().await;
    let req = Request::builder()
        .method("POST")
        .uri("/profile")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = json_response(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_get_profile_round_trip() {
    let app = setup_test_app().await;
    let created = create(&app, sample_profile()).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = json_response(&app, empty_request("GET", &format!("/profile/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["phone"], "555");
    assert_eq!(body["address"]["zip"], "12345");
}

#[tokio::test]
async fn test_get_unknown_profile_is_not_found() {
    let app = setup_test_app().await;

    let (status, body) = json_response(&app, empty_request("GET", "/profile/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "profile not found");
}

#[tokio::test]
async fn test_update_profile() {
    let app = setup_test_app().await;
    let created = create(&app, sample_profile()).await;
    let id = created["id"].as_str().unwrap();

    let mut input = sample_profile();
    input["name"] = json!("B");
    input["address"]["city"] = json!("X");

    let (status, body) =
        json_response(&app, json_request("PUT", &format!("/profile/{id}"), input)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "profile updated");
    assert_eq!(body["profile"]["id"], id);
    assert_eq!(body["profile"]["name"], "B");
    assert_eq!(body["profile"]["address"]["city"], "X");
    assert_eq!(body["profile"]["address"]["street"], "1 Main St");

    let (_, fetched) = json_response(&app, empty_request("GET", &format!("/profile/{id}"))).await;
    assert_eq!(fetched["name"], "B");
}

#[tokio::test]
async fn test_update_with_empty_required_field_is_bad_request() {
    let app = setup_test_app().await;
    let created = create(&app, sample_profile()).await;
    let id = created["id"].as_str().unwrap();

    let mut input = sample_profile();
    input["phone"] = json!("");

    let (status, body) =
        json_response(&app, json_request("PUT", &format!("/profile/{id}"), input)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "phone is required");

    let (_, fetched) = json_response(&app, empty_request("GET", &format!("/profile/{id}"))).await;
    assert_eq!(fetched["phone"], "555");
}

#[tokio::test]
async fn test_update_unknown_profile_is_bad_request() {
    let app = setup_test_app().await;

    let (status, body) =
        json_response(&app, json_request("PUT", "/profile/nope", sample_profile())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "profile not found");
}

#[tokio::test]
async fn test_delete_profile() {
    let app = setup_test_app().await;
    let created = create(&app, sample_profile()).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) =
        json_response(&app, empty_request("DELETE", &format!("/profile/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "profile deleted");

    let (status, _) = json_response(&app, empty_request("GET", &format!("/profile/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_profile_leaves_list_unchanged() {
    let app = setup_test_app().await;
    let created = create(&app, sample_profile()).await;

    let (status, body) = json_response(&app, empty_request("DELETE", "/profile/nope")).await;
    assert!(status == StatusCode::BAD_REQUEST || status == StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (_, list) = json_response(&app, empty_request("GET", "/profiles")).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], created["id"]);
}
