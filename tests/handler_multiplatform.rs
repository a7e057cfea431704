mod common;

use axum::http::{HeaderValue, header};
use axum_test::TestServer;

const IPHONE_UA: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";
const ANDROID_UA: &str =
    "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Chrome/120.0 Mobile Safari/537.36";
const DESKTOP_UA: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36";

fn all_targets(server: &TestServer) -> axum_test::TestRequest {
    server
        .get("/multiplatform")
        .add_query_param("ios", "https://a.example")
        .add_query_param("android", "https://b.example")
        .add_query_param("desktop", "https://c.example")
        .add_query_param("u", "https://d.example")
}

#[tokio::test]
async fn test_ios_target() {
    let server = common::create_test_server();

    let response = all_targets(&server).add_header("User-Agent", IPHONE_UA).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://a.example");
}

#[tokio::test]
async fn test_ipad_counts_as_ios() {
    let server = common::create_test_server();

    let response = all_targets(&server)
        .add_header("User-Agent", "Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X)")
        .await;

    assert_eq!(response.header("location"), "https://a.example");
}

#[tokio::test]
async fn test_android_target() {
    let server = common::create_test_server();

    let response = all_targets(&server).add_header("User-Agent", ANDROID_UA).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://b.example");
}

#[tokio::test]
async fn test_desktop_target() {
    let server = common::create_test_server();

    let response = all_targets(&server).add_header("User-Agent", DESKTOP_UA).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://c.example");
}

#[tokio::test]
async fn test_missing_user_agent_is_desktop() {
    let server = common::create_test_server();

    let response = all_targets(&server).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://c.example");
}

#[tokio::test]
async fn test_fallback_when_platform_target_missing() {
    let server = common::create_test_server();

    let response = server
        .get("/multiplatform")
        .add_query_param("ios", "https://a.example")
        .add_query_param("u", "https://d.example")
        .add_header("User-Agent", ANDROID_UA)
        .await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://d.example");
}

#[tokio::test]
async fn test_empty_platform_target_uses_fallback() {
    let server = common::create_test_server();

    let response = server
        .get("/multiplatform")
        .add_query_param("desktop", "")
        .add_query_param("u", "https://d.example")
        .await;

    assert_eq!(response.header("location"), "https://d.example");
}

#[tokio::test]
async fn test_missing_target() {
    let server = common::create_test_server();

    let response = server
        .get("/multiplatform")
        .add_query_param("ios", "https://a.example")
        .add_header("User-Agent", DESKTOP_UA)
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.text(), "Missing target");
}

#[tokio::test]
async fn test_no_targets_at_all() {
    let server = common::create_test_server();

    let response = server.get("/multiplatform").await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.text(), "Missing target");
}

#[tokio::test]
async fn test_target_with_newline_has_location() {
    let server = common::create_test_server();

    let response = server
        .get("/multiplatform")
        .add_query_param("u", "https://x.example/a\nb")
        .await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://x.example/ab");
}

#[tokio::test]
async fn test_unusable_target_is_missing() {
    let server = common::create_test_server();

    let response = server
        .get("/multiplatform")
        .add_query_param("u", "not a url\n")
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.text(), "Missing target");
}

#[tokio::test]
async fn test_non_ascii_user_agent_keeps_detection() {
    let server = common::create_test_server();
    let user_agent = HeaderValue::from_bytes(b"Mozilla/5.0 (iPhone; \xff\xfe) Mobile").unwrap();

    let response = all_targets(&server)
        .add_header(header::USER_AGENT, user_agent)
        .await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://a.example");
}
