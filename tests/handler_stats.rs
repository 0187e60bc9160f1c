mod common;

use axum_test::TestServer;
use serde_json::{Value, json};

#[tokio::test]
async fn test_stats_success() {
    let (state, _repo) = common::create_test_state();
    let server = TestServer::new(common::test_router(state)).unwrap();

    let created = server
        .post("/shorten")
        .add_header("Host", "s.example.com")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;
    let created_body: Value = created.json();
    let token = created_body["data"]["short_token"].as_str().unwrap().to_string();

    let response = server.get(&format!("/stats/{token}")).await;

    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["message"], "URL retrieved successfully");
    assert_eq!(body["data"]["short_token"], token.as_str());
    assert_eq!(body["data"]["original"], "https://example.com/page");
    assert_eq!(body["data"]["click_count"], 0);
}

#[tokio::test]
async fn test_stats_not_found() {
    let (state, _repo) = common::create_test_state();
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server.get("/stats/doesnotexist0000").await;

    assert_eq!(response.status_code(), 404);

    let body: Value = response.json();
    assert_eq!(body["message"], "Short URL not found");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_stats_excludes_soft_deleted_records() {
    let (state, repo) = common::create_test_state();
    let server = TestServer::new(common::test_router(state)).unwrap();

    repo.insert_deleted("deadbeefdeadbeef", "https://example.com/old");

    let response = server.get("/stats/deadbeefdeadbeef").await;

    assert_eq!(response.status_code(), 404);
}
