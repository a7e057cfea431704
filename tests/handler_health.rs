mod common;

use serde_json::Value;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["click_store"]["status"], "ok");
}

#[tokio::test]
async fn test_health_reports_tracked_targets() {
    let server = common::create_test_server();

    server
        .get("/redirect")
        .add_query_param("to", "https://x.example.com")
        .await;

    let json = server.get("/health").await.json::<Value>();

    assert_eq!(json["checks"]["click_store"]["message"], "Tracking 1 targets");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = common::create_test_server();

    let json = server.get("/health").await.json::<Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json["checks"].get("click_store").is_some());
}
