#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use booking_server::AppState;
use booking_server::api::build_app;
use booking_server::db::DbService;
use booking_server::reservations::BusinessHours;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Router over a fresh in-memory database with default business hours
pub async fn test_app() -> Router {
    let db = DbService::in_memory().await.unwrap();
    build_app(AppState::with_pool(db.pool, BusinessHours::default()))
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

pub async fn post(app: &Router, uri: &str, data: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(json!({ "data": data }))).await
}

pub async fn put(app: &Router, uri: &str, data: Value) -> (StatusCode, Value) {
    send(app, "PUT", uri, Some(json!({ "data": data }))).await
}

/// A valid booking: 2099-06-10 is a Wednesday
pub fn ann_lee() -> Value {
    json!({
        "first_name": "Ann",
        "last_name": "Lee",
        "mobile_number": "123-456-7890",
        "reservation_date": "2099-06-10",
        "reservation_time": "18:00",
        "people": 4
    })
}

pub fn with(mut base: Value, field: &str, value: Value) -> Value {
    base[field] = value;
    base
}

pub fn without(mut base: Value, field: &str) -> Value {
    if let Some(map) = base.as_object_mut() {
        map.remove(field);
    }
    base
}

/// Create a reservation and return its id
pub async fn create_reservation(app: &Router, data: Value) -> i64 {
    let (status, body) = post(app, "/reservations", data).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"]["reservation_id"].as_i64().unwrap()
}

pub fn error_message(body: &Value) -> &str {
    body["error"].as_str().unwrap_or_default()
}
