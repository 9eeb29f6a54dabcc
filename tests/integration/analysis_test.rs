//! Integration tests for version analysis.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_analyze_second_version() {
    let app = helpers::TestApp::new().await;
    app.upload("report.pdf", &[0u8; 1500]).await;
    let second = app.upload("report.pdf", &[0u8; 2048]).await;
    let id = second.data()["id"].as_i64().unwrap();

    let response = app.request("POST", &format!("/api/files/{id}/analyze")).await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.data()["version_id"], id);

    let text = response.data()["text"].as_str().unwrap().to_string();
    assert!(text.starts_with("small, "), "{text}");
    assert!(text.contains("version 2"), "{text}");
    assert!(text.contains("2.00 KB"), "{text}");
    assert!(text.contains("'report.pdf'"), "{text}");

    let fetched = app.request("GET", &format!("/api/files/{id}/analysis")).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.data()["text"], text.as_str());
}

#[tokio::test]
async fn test_analyze_twice_conflicts() {
    let app = helpers::TestApp::new().await;
    let uploaded = app.upload("notes.txt", b"hello").await;
    let id = uploaded.data()["id"].as_i64().unwrap();

    let first = app.request("POST", &format!("/api/files/{id}/analyze")).await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app.request("POST", &format!("/api/files/{id}/analyze")).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_analysis_not_found() {
    let app = helpers::TestApp::new().await;
    let uploaded = app.upload("notes.txt", b"hello").await;
    let id = uploaded.data()["id"].as_i64().unwrap();

    let response = app.request("GET", &format!("/api/files/{id}/analysis")).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("POST", "/api/files/4242/analyze").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
