// Shared helpers for integration tests
#![allow(dead_code)]

pub mod mock_webhook;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use webhook_relay::config::RelayConfig;

/// Relay configuration pointing at `url`, everything else default.
pub fn config_for(url: &str) -> RelayConfig {
    RelayConfig {
        webhook_url: Some(url.to_string()),
        ..RelayConfig::default()
    }
}

/// Sends a POST with `body` to `uri` and returns status and raw body text.
pub async fn post(app: Router, uri: &str, body: &str) -> (StatusCode, String) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Extracts the `message` field of an error envelope.
pub fn error_message(body: &str) -> String {
    let value: serde_json::Value = serde_json::from_str(body).unwrap();
    value["message"].as_str().unwrap().to_string()
}
