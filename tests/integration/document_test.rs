//! Integration tests for uploading, listing, and downloading versions.

mod helpers;

use axum::http::{StatusCode, header};

#[tokio::test]
async fn test_upload_assigns_sequential_versions() {
    let app = helpers::TestApp::new().await;

    let first = app.upload("report.pdf", &[0u8; 1500]).await;
    assert_eq!(first.status, StatusCode::CREATED, "{:?}", first.body);
    assert_eq!(first.body["success"], true);
    assert_eq!(first.data()["logical_name"], "report.pdf");
    assert_eq!(first.data()["version"], 1);
    assert_eq!(first.data()["storage_name"], "report_v1.pdf");
    assert_eq!(first.data()["size"], 1500);

    let second = app.upload("report.pdf", &[1u8; 2048]).await;
    assert_eq!(second.status, StatusCode::CREATED);
    assert_eq!(second.data()["version"], 2);
    assert_eq!(second.data()["storage_name"], "report_v2.pdf");

    let stored = app.dir.path().join("storage");
    assert_eq!(std::fs::read(stored.join("report_v1.pdf")).unwrap().len(), 1500);
    assert_eq!(std::fs::read(stored.join("report_v2.pdf")).unwrap().len(), 2048);
}

#[tokio::test]
async fn test_list_most_recent_first() {
    let app = helpers::TestApp::new().await;
    app.upload("a.txt", b"one").await;
    app.upload("b.txt", b"two").await;
    app.upload("a.txt", b"three").await;

    let response = app.request("GET", "/api/files").await;
    assert_eq!(response.status, StatusCode::OK);

    let names: Vec<_> = response
        .data()
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["storage_name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["a_v2.txt", "b_v1.txt", "a_v1.txt"]);
}

#[tokio::test]
async fn test_document_versions_newest_first() {
    let app = helpers::TestApp::new().await;
    app.upload("notes.md", b"v1").await;
    app.upload("notes.md", b"v2").await;
    app.upload("other.md", b"x").await;

    let response = app.request("GET", "/api/documents/notes.md/versions").await;
    assert_eq!(response.status, StatusCode::OK);

    let numbers: Vec<_> = response
        .data()
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["version"].as_i64().unwrap())
        .collect();
    assert_eq!(numbers, vec![2, 1]);
}

#[tokio::test]
async fn test_get_and_download_version() {
    let app = helpers::TestApp::new().await;
    let uploaded = app.upload("data.csv", b"a,b\n1,2\n").await;
    let id = uploaded.data()["id"].as_i64().unwrap();

    let response = app.request("GET", &format!("/api/files/{id}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["storage_name"], "data_v1.csv");
    assert!(response.data().get("storage_path").is_none());

    let download = app.request("GET", &format!("/api/files/{id}/download")).await;
    assert_eq!(download.status, StatusCode::OK);
    assert_eq!(&download.raw[..], b"a,b\n1,2\n");
    assert_eq!(
        download.headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"data.csv\""
    );
}

#[tokio::test]
async fn test_unknown_and_invalid_ids() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/files/999").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");

    let response = app.request("GET", "/api/files/999/download").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", "/api/files/abc").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_upload_requires_named_file_field() {
    let app = helpers::TestApp::new().await;

    let response = app
        .multipart("form-data; name=\"attachment\"; filename=\"x.txt\"", b"x", None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.multipart("form-data; name=\"file\"", b"x", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let list = app.request("GET", "/api/files").await;
    assert_eq!(list.data().as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_actor_header() {
    let app = helpers::TestApp::with_config(|c| c.uploads.default_actor_id = 9).await;

    let response = app.upload_as("a.txt", b"a", Some("42")).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.data()["uploaded_by"], 42);

    let response = app.upload("a.txt", b"a").await;
    assert_eq!(response.data()["uploaded_by"], 9);

    let response = app.upload_as("a.txt", b"a", Some("someone")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_positive_actor_is_rejected() {
    let app = helpers::TestApp::new().await;

    for actor in ["0", "-3"] {
        let response = app.upload_as("a.txt", b"a", Some(actor)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "actor {actor}");
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
    }

    let list = app.request("GET", "/api/files").await;
    assert_eq!(list.data().as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_upload_over_limit_is_rejected() {
    let app = helpers::TestApp::with_config(|c| c.storage.max_upload_size_bytes = 256).await;

    let response = app.upload("big.bin", &[7u8; 4096]).await;
    assert!(response.status.is_client_error(), "{}", response.status);

    let list = app.request("GET", "/api/files").await;
    assert_eq!(list.data().as_array().unwrap().len(), 0);
}
