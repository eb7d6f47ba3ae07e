//! Trend analytics over the document history.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use trustseal_core::trends::{self, DayRollup, HistoryStats, TrendDirection};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Payload for `GET /trends`: per-day rollups, the direction signal, and
/// whole-history stats for summary tiles.
#[derive(Debug, Serialize)]
pub struct TrendsPayload {
    pub rollups: Vec<DayRollup>,
    pub direction: TrendDirection,
    pub stats: HistoryStats,
}

/// GET /trends -- compute trend analytics from the current history.
///
/// An empty history is a defined empty state (no rollups, stable), not an
/// error.
pub async fn get_trends(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<TrendsPayload>>> {
    let history = state.history.read().await;

    let summary = trends::aggregate(&history);
    let stats = trends::history_stats(&history);

    Ok(Json(DataResponse {
        data: TrendsPayload {
            rollups: summary.rollups,
            direction: summary.direction,
            stats,
        },
    }))
}
