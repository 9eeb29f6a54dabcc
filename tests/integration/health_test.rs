//! Integration tests for health checks and the service banner.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_banner() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["message"].as_str().unwrap().contains("DocVault"));
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "ok");
}

#[tokio::test]
async fn test_health_detailed() {
    let app = helpers::TestApp::new().await;
    app.upload("a.txt", b"a").await;

    let response = app.request("GET", "/api/health/detailed").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "ok");
    assert_eq!(response.data()["database"], "connected");
    assert_eq!(response.data()["storage"], "available");
    assert_eq!(response.data()["versions"], 1);
}
