mod common;

use common::TestApp;
use reqwest::Client;
use serde_json::json;

#[tokio::test]
async fn live_endpoint_reports_live() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/live", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({ "status": "live" }));

    app.cleanup().await;
}

#[tokio::test]
async fn ready_endpoint_reports_ready() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({ "status": "ready" }));

    app.cleanup().await;
}

#[tokio::test]
async fn host_info_reports_hostname_and_environment() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/os", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["os"].as_str().is_some_and(|s| !s.is_empty()));
    assert!(body["env"].as_str().is_some_and(|s| !s.is_empty()));

    app.cleanup().await;
}
