//! Integration tests for the health endpoint.

mod common;

use common::TestApp;
use reqwest::Client;

#[tokio::test]
async fn health_check_returns_fixed_body() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/chatbot/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Chatbot API is running");
}

#[tokio::test]
async fn health_check_is_idempotent() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let mut bodies = Vec::new();
    for _ in 0..3 {
        let response = client
            .get(format!("{}/api/chatbot/health", app.address))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status().as_u16(), 200);
        bodies.push(response.text().await.expect("Failed to read body"));
    }

    assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/chatbot/health", app.address))
        .header("x-request-id", "test-req-42")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("test-req-42")
    );
}
