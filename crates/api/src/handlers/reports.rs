//! CSV export of the document history.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use chrono::Utc;

use trustseal_store::report::render_csv;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /reports/csv -- download the history as a CSV report.
pub async fn export_csv(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let history = state.history.read().await;
    let csv = render_csv(&history);

    let filename = format!("bulk-analysis-{}.csv", Utc::now().date_naive());

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    ))
}
