//! Integration tests for single-file analysis and the history listing.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;

#[tokio::test]
async fn analyze_requires_a_logged_in_user() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    let response = post_json(
        app,
        "/api/v1/documents/analyze",
        json!({ "filename": "diploma.pdf", "file_size": 2048 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn analyze_returns_a_contract_conforming_document() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());
    common::login_as_admin(&app).await;

    let response = post_json(
        app.clone(),
        "/api/v1/documents/analyze",
        json!({ "filename": "diploma.pdf", "file_size": 2048 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let doc = &json["data"];
    assert_eq!(doc["filename"], "diploma.pdf");
    assert_eq!(doc["file_size"], 2048);

    let status = doc["status"].as_str().unwrap();
    let confidence = doc["confidence_score"].as_f64().unwrap();
    let band = match status {
        "authentic" => (0.92, 0.99),
        "suspicious" => (0.45, 0.85),
        "fraudulent" => (0.15, 0.40),
        other => panic!("unexpected status {other}"),
    };
    assert!(confidence >= band.0 && confidence < band.1);
}

#[tokio::test]
async fn analyze_appends_to_the_history_and_persists_it() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());
    common::login_as_admin(&app).await;

    for name in ["a.pdf", "b.png"] {
        let response = post_json(
            app.clone(),
            "/api/v1/documents/analyze",
            json!({ "filename": name, "file_size": 100 }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get(app.clone(), "/api/v1/documents").await;
    let json = body_json(response).await;
    let docs = json["data"].as_array().unwrap();
    assert_eq!(docs.len(), 2);
    // Newest first.
    assert_eq!(docs[0]["filename"], "b.png");
    assert_eq!(docs[1]["filename"], "a.pdf");

    assert!(dir.path().join("trustseal_documents.json").exists());
}

#[tokio::test]
async fn oversized_files_are_rejected_before_analysis() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());
    common::login_as_admin(&app).await;

    let response = post_json(
        app,
        "/api/v1/documents/analyze",
        json!({ "filename": "huge.pdf", "file_size": 11 * 1024 * 1024 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn unsupported_file_types_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());
    common::login_as_admin(&app).await;

    let response = post_json(
        app,
        "/api/v1/documents/analyze",
        json!({ "filename": "tool.exe", "file_size": 100 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn zero_byte_files_surface_as_analysis_failures() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());
    common::login_as_admin(&app).await;

    let response = post_json(
        app,
        "/api/v1/documents/analyze",
        json!({ "filename": "hollow.pdf", "file_size": 0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "ANALYSIS_FAILED");
}
