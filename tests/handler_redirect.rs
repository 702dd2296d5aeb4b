mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use chrono::{Duration, Utc};
use snapurl::AppState;
use snapurl::api::handlers::redirect_handler;
use std::sync::Arc;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/{alias}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let store = common::test_store();
    common::create_test_link(
        store.clone(),
        "redir1",
        "https://example.com/target",
        Utc::now(),
        30,
    )
    .await;
    let server = server(common::create_test_state(store));

    let response = server.get("/redir1").await;

    assert_eq!(response.status_code(), 307);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_is_repeatable() {
    let store = common::test_store();
    common::create_test_link(store.clone(), "again1", "https://example.com", Utc::now(), 30)
        .await;
    let server = server(common::create_test_state(store));

    let first = server.get("/again1").await;
    let second = server.get("/again1").await;

    assert_eq!(first.status_code(), 307);
    assert_eq!(first.header("location"), second.header("location"));
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = server(common::create_test_state(common::test_store()));

    let response = server.get("/notfound").await;

    response.assert_status_not_found();

    let html = response.text();
    assert!(html.contains("Short URL not found."));
    assert!(html.contains(&format!("url={}", common::HOME_URL)));
}

#[tokio::test]
async fn test_redirect_expired() {
    let store = common::test_store();
    common::create_test_link(
        store.clone(),
        "gone11",
        "https://example.com",
        Utc::now() - Duration::hours(1),
        1,
    )
    .await;
    let server = server(common::create_test_state(store));

    let response = server.get("/gone11").await;

    response.assert_status(StatusCode::GONE);
    assert!(response.text().contains("This short URL has expired."));
}

#[tokio::test]
async fn test_redirect_blank_alias() {
    let server = server(common::create_test_state(common::test_store()));

    let response = server.get("/%20").await;

    response.assert_status_bad_request();
    assert!(response.text().contains("Invalid short URL."));
}

#[tokio::test]
async fn test_redirect_matches_alias_exactly() {
    let store = common::test_store();
    common::create_test_link(store.clone(), "abc123", "https://example.com", Utc::now(), 30)
        .await;
    let server = server(common::create_test_state(store));

    server.get("/bc123").await.assert_status_not_found();
    server.get("/ABC123").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_storage_failure_is_json_error() {
    let server = server(common::create_test_state(Arc::new(common::BrokenStore)));

    let response = server.get("/abc123").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "storage_error"
    );
}
