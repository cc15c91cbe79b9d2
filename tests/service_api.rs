use chrono::DateTime;
use serde_json::Value;

#[path = "support/mod.rs"]
mod support;

use support::build_test_server;

#[tokio::test]
async fn welcome_payload_is_static() {
    let (server, _store) = build_test_server();

    let response = server.get("/").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["message"], "Roster user directory is running");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn hello_echoes_the_path_parameter() {
    let (server, _store) = build_test_server();

    let body: Value = server.get("/hello/Margaret").await.json();
    assert_eq!(body["message"], "Hello, Margaret!");
}

#[tokio::test]
async fn info_reports_service_metadata() {
    let (server, _store) = build_test_server();

    let response = server.get("/info").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["app_name"], "roster-server");
    assert_eq!(body["status"], "running");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn health_stays_200_and_tracks_store_state() {
    let (server, store) = build_test_server();

    let healthy = server.get("/health").await;
    healthy.assert_status_ok();
    let body: Value = healthy.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
    DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap())
        .expect("timestamp is RFC 3339");

    store.set_healthy(false);

    // Degraded state still answers 200.
    let unhealthy = server.get("/health").await;
    unhealthy.assert_status_ok();
    let body: Value = unhealthy.json();
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["database"], "disconnected");
}
