pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login            resolve credentials, persist identity (POST)
/// /auth/register         create a demo account (POST)
/// /auth/logout           clear the persisted identity (POST)
///
/// /documents             document history, newest first (GET)
/// /documents/analyze     single-file classification (POST)
/// /documents/batch       ordered batch analysis (POST)
///
/// /trends                per-day rollups + direction + history stats (GET)
/// /reports/csv           CSV export of the history (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/documents", get(handlers::documents::list_documents))
        .route("/documents/analyze", post(handlers::documents::analyze))
        .route("/documents/batch", post(handlers::batch::run_batch))
        .route("/trends", get(handlers::trends::get_trends))
        .route("/reports/csv", get(handlers::reports::export_csv))
}
