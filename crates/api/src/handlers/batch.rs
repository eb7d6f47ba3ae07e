//! Ordered batch analysis over the upload queue.

use std::time::Duration;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use trustseal_core::file::FileDescriptor;
use trustseal_pipeline::{BulkQueueProcessor, QueueItem};
use trustseal_store::SessionStore;

use crate::error::{AppError, AppResult};
use crate::handlers::documents::current_owner;
use crate::response::DataResponse;
use crate::state::AppState;

/// One file entry in a batch submission.
#[derive(Debug, Deserialize, Serialize)]
pub struct BatchFileEntry {
    pub filename: String,
    pub file_size: u64,
}

/// Body for `POST /documents/batch`.
#[derive(Debug, Deserialize, Validate)]
pub struct BatchRequest {
    #[validate(length(min = 1, max = 100, message = "must contain 1-100 files"))]
    pub files: Vec<BatchFileEntry>,
}

/// POST /documents/batch -- analyze an ordered list of files.
///
/// Files are validated up front: a file that fails upload validation
/// rejects the whole request before anything is queued. Analysis failures,
/// by contrast, are isolated per item and reported in the returned queue.
pub async fn run_batch(
    State(state): State<AppState>,
    Json(payload): Json<BatchRequest>,
) -> AppResult<Json<DataResponse<Vec<QueueItem>>>> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let owner_id = current_owner(&state).await?;

    let mut queue = BulkQueueProcessor::new(owner_id);
    if state.config.analysis_delay_ms > 0 {
        queue = queue.with_analysis_delay(Duration::from_millis(state.config.analysis_delay_ms));
    }

    for entry in &payload.files {
        let descriptor = FileDescriptor::from_name(entry.filename.as_str(), entry.file_size);
        queue.enqueue(descriptor)?;
    }

    let processed = {
        let mut rng = state.rng.lock().await;
        queue.run_pending(&mut *rng).await
    };

    let completed = queue.completed_documents();
    tracing::info!(
        submitted = payload.files.len(),
        processed,
        completed = completed.len(),
        "Batch analysis finished",
    );

    // Persist the successful results; failed items stay visible in the
    // returned queue but never enter the history.
    if !completed.is_empty() {
        let snapshot = {
            let mut history = state.history.write().await;
            history.extend(completed);
            history.clone()
        };
        state.store.save_documents(&snapshot)?;
    }

    Ok(Json(DataResponse {
        data: queue.items().to_vec(),
    }))
}
