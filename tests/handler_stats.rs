mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::{Duration, Utc};
use serde_json::Value;
use snapurl::AppState;
use snapurl::api::handlers::{stats_handler, stats_list_handler};

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/stats", get(stats_list_handler))
        .route("/api/stats/{alias}", get(stats_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_stats_list_empty() {
    let server = server(common::create_test_state(common::test_store()));

    let response = server.get("/api/stats").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["total"], 0);
    assert!(json["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_stats_list_includes_expired_links() {
    let store = common::test_store();
    common::create_test_link(
        store.clone(),
        "old111",
        "https://old.example.com",
        Utc::now() - Duration::hours(2),
        60,
    )
    .await;
    common::create_test_link(store.clone(), "new222", "https://new.example.com", Utc::now(), 60)
        .await;
    let server = server(common::create_test_state(store));

    let response = server.get("/api/stats").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["total"], 2);

    let items = json["items"].as_array().unwrap();
    assert_eq!(items[0]["alias"], "old111");
    assert_eq!(items[0]["expired"], true);
    assert_eq!(items[1]["alias"], "new222");
    assert_eq!(items[1]["expired"], false);
    assert_eq!(items[1]["original"], "https://new.example.com");
    assert_eq!(items[1]["short_url"], "http://s.example.com/new222");
    assert_eq!(items[1]["total_clicks"], 0);
    assert!(items[1]["clicks"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_stats_single_alias() {
    let store = common::test_store();
    common::create_test_link(store.clone(), "abc123", "https://example.com", Utc::now(), 30)
        .await;
    let server = server(common::create_test_state(store));

    let response = server.get("/api/stats/abc123").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["alias"], "abc123");
    assert_eq!(json["original"], "https://example.com");
    assert!(json["created_at"].is_string());
    assert!(json["expiry"].is_string());
}

#[tokio::test]
async fn test_stats_single_alias_not_found() {
    let server = server(common::create_test_state(common::test_store()));

    let response = server.get("/api/stats/nothere").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}
