//! End-to-end tests through the real router with the real ping prober.
//!
//! Targets live in TEST-NET-3 (203.0.113.0/24), which is reserved for
//! documentation and never routable, so probes resolve quickly as either
//! `Unavailable` or (without a usable ping binary) `Error`. Assertions stick
//! to properties that hold for both.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use pingboard::api::create_api_server;
use pingboard::probe::PingProber;
use pingboard::store::PingStore;
use pingboard::sweep::SweepCoordinator;
use std::sync::Arc;
use tower::Service;

fn create_server() -> axum::Router {
    let coordinator = SweepCoordinator::new(PingStore::new(), Arc::new(PingProber::new()));
    create_api_server(coordinator)
}

fn json_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_ping_result_reset_lifecycle() {
    let mut app = create_server();

    // Probe one unroutable host
    let response = app
        .call(json_request("/ping", r#"{"addresses": ["203.0.113.5"]}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["host"], "203.0.113.5");
    // Unavailable or Error depending on the environment; never a success
    assert_eq!(records[0]["successCount"], 0);
    assert_eq!(records[0]["failureCount"], 1);
    assert_ne!(records[0]["status"], "Available");
    assert!(records[0]["lastUnavailable"].is_string());
    assert!(records[0]["lastAvailable"].is_null());

    // The accumulated state shows the same record
    let response = app.call(get_request("/result")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["203.0.113.5"]["failureCount"], 1);

    // Reset removes it and still confirms
    let response = app
        .call(json_request("/reset", r#"{"addresses": ["203.0.113.5"]}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Ping results have been reset.");

    let response = app.call(get_request("/result")).await.unwrap();
    let body = body_json(response).await;
    assert!(body.get("203.0.113.5").is_none());
}

#[tokio::test]
async fn test_ping_accumulates_counters_across_requests() {
    let mut app = create_server();

    for _ in 0..2 {
        let response = app
            .call(json_request("/ping", r#"{"addresses": ["203.0.113.9"]}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.call(get_request("/result")).await.unwrap();
    let body = body_json(response).await;
    let record = &body["203.0.113.9"];
    let total = record["successCount"].as_u64().unwrap() + record["failureCount"].as_u64().unwrap();
    assert_eq!(total, 2);
}

#[tokio::test]
async fn test_ping_validation_errors() {
    let mut app = create_server();

    // Missing addresses field
    let response = app.call(json_request("/ping", r#"{}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Empty list
    let response = app
        .call(json_request("/ping", r#"{"addresses": []}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Not an array
    let response = app
        .call(json_request("/ping", r#"{"addresses": "203.0.113.5"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_subnet_spec_expands_to_nothing() {
    let mut app = create_server();

    let response = app
        .call(json_request("/ping", r#"{"addresses": ["1.0"]}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_metrics_endpoint_full_subnet_sweep() {
    let mut app = create_server();

    let response = app.call(get_request("/metrics/203.0.113.0")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; version=0.0.4"
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(text.contains("active_hosts_count{subnet=\"203.0.113.0\"}"));
    assert!(text.contains("inactive_hosts_count{subnet=\"203.0.113.0\"}"));

    let host_lines = text
        .lines()
        .filter(|l| l.starts_with("status_hosts_list{"))
        .count();
    assert_eq!(host_lines, 254);

    // active + inactive always partition the 254 probed hosts
    let active = gauge_value(&text, "active_hosts_count");
    let inactive = gauge_value(&text, "inactive_hosts_count");
    assert_eq!(active + inactive, 254);
}

#[tokio::test]
async fn test_metrics_rejects_malformed_subnet_param() {
    let mut app = create_server();

    let response = app.call(get_request("/metrics/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "INVALID_SUBNET");
}

fn gauge_value(text: &str, name: &str) -> i64 {
    text.lines()
        .find(|l| l.starts_with(&format!("{name}{{")))
        .and_then(|l| l.rsplit(' ').next())
        .and_then(|v| v.parse().ok())
        .unwrap()
}
