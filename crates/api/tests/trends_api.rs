//! Integration tests for trend analytics and CSV export.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, get, post_json};
use serde_json::json;

#[tokio::test]
async fn empty_history_yields_a_defined_empty_state() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    let response = get(app, "/api/v1/trends").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["rollups"].as_array().unwrap().len(), 0);
    assert_eq!(json["data"]["direction"], "stable");
    assert_eq!(json["data"]["stats"]["total_documents"], 0);
}

#[tokio::test]
async fn trends_reflect_analyzed_documents() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());
    common::login_as_admin(&app).await;

    for name in ["a.pdf", "b.pdf", "c.png"] {
        post_json(
            app.clone(),
            "/api/v1/documents/analyze",
            json!({ "filename": name, "file_size": 100 }),
        )
        .await;
    }

    let response = get(app.clone(), "/api/v1/trends").await;
    let json = body_json(response).await;

    // All uploads happened just now, so exactly one rollup day exists and
    // a single day always reads as stable.
    let rollups = json["data"]["rollups"].as_array().unwrap();
    assert_eq!(rollups.len(), 1);
    assert_eq!(rollups[0]["document_count"], 3);
    assert_eq!(json["data"]["direction"], "stable");
    assert_eq!(json["data"]["stats"]["total_documents"], 3);

    let average = rollups[0]["average_confidence"].as_f64().unwrap();
    assert!(average > 0.0 && average < 1.0);
}

#[tokio::test]
async fn csv_export_carries_headers_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());
    common::login_as_admin(&app).await;

    post_json(
        app.clone(),
        "/api/v1/documents/analyze",
        json!({ "filename": "a.pdf", "file_size": 100 }),
    )
    .await;

    let response = get(app.clone(), "/api/v1/reports/csv").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/csv"
    );

    let text = body_text(response).await;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "Filename,Status,Confidence Score,Blockchain Verified,Anomalies Count,AI Suggestions"
    );
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("a.pdf,"));
}
