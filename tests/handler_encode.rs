mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_encode_wifi() {
    let server = common::create_test_server();

    let response = server
        .post("/api/encode")
        .json(&json!({
            "kind": "wifi",
            "fields": { "ssid": "My;Net", "password": "p:1", "hidden": true },
            "ec_level": "Q"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["kind"], "wifi");
    assert_eq!(body["payload"], r"WIFI:T:WPA;S:My\;Net;P:p\:1;H:true;;");
    assert_eq!(body["ready"], true);
    assert_eq!(body["ec_level"], "Q");
}

#[tokio::test]
async fn test_encode_defaults_ec_level() {
    let server = common::create_test_server();

    let response = server
        .post("/api/encode")
        .json(&json!({ "kind": "url", "fields": { "url": "https://x.example" } }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["payload"], "https://x.example");
    assert_eq!(body["ec_level"], "M");
}

#[tokio::test]
async fn test_encode_sanitizes_input() {
    let server = common::create_test_server();

    let response = server
        .post("/api/encode")
        .json(&json!({ "kind": "text", "fields": { "text": "Çağrı ☕" } }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["payload"], "Cagri ");
}

#[tokio::test]
async fn test_encode_empty_payload_not_ready() {
    let server = common::create_test_server();

    let response = server
        .post("/api/encode")
        .json(&json!({ "kind": "url" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["payload"], "");
    assert_eq!(body["ready"], false);
}

#[tokio::test]
async fn test_encode_with_tracking() {
    let server = common::create_test_server();

    let response = server
        .post("/api/encode")
        .json(&json!({
            "kind": "url",
            "fields": { "url": "https://shop.example.com" },
            "tracking": { "utm_source": "poster", "utm_medium": "print" }
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["payload"],
        "https://qr.example.com/redirect?to=https%3A%2F%2Fshop.example.com&utm_source=poster&utm_medium=print"
    );
}

#[tokio::test]
async fn test_encode_multi_points_at_service() {
    let server = common::create_test_server();

    let response = server
        .post("/api/encode")
        .json(&json!({
            "kind": "multi",
            "fields": { "ios": "https://a.example", "fallback": "https://d.example" }
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["payload"],
        "https://qr.example.com/multiplatform?ios=https%3A%2F%2Fa.example&u=https%3A%2F%2Fd.example"
    );
}

#[tokio::test]
async fn test_encode_unknown_kind() {
    let server = common::create_test_server();

    let response = server
        .post("/api/encode")
        .json(&json!({ "kind": "fax", "fields": {} }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["details"]["kind"], "fax");
}

#[tokio::test]
async fn test_encode_unknown_field() {
    let server = common::create_test_server();

    let response = server
        .post("/api/encode")
        .json(&json!({ "kind": "sms", "fields": { "phone": "+1555" } }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["details"]["field"], "phone");
}

#[tokio::test]
async fn test_encode_wrong_field_type() {
    let server = common::create_test_server();

    let response = server
        .post("/api/encode")
        .json(&json!({ "kind": "location", "fields": { "lat": true } }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["details"]["expected"], "text");
}

#[tokio::test]
async fn test_encode_rejects_oversized_utm() {
    let server = common::create_test_server();

    let response = server
        .post("/api/encode")
        .json(&json!({
            "kind": "url",
            "fields": { "url": "https://x.example" },
            "tracking": { "utm_source": "x".repeat(201) }
        }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_kinds_lists_every_kind() {
    let server = common::create_test_server();

    let response = server.get("/api/kinds").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let kinds = body["kinds"].as_array().unwrap();
    assert_eq!(kinds.len(), 19);

    let wifi = kinds.iter().find(|k| k["kind"] == "wifi").unwrap();
    assert!(
        wifi["fields"]
            .as_array()
            .unwrap()
            .contains(&json!({ "key": "hidden", "type": "flag" }))
    );
}
