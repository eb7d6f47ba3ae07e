//! Single-file classification and history listing.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use trustseal_core::assembler;
use trustseal_core::document::Document;
use trustseal_core::error::CoreError;
use trustseal_core::file::FileDescriptor;
use trustseal_core::validation::validate_upload;
use trustseal_store::SessionStore;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Body for `POST /documents/analyze`: the descriptor of an uploaded file.
#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub filename: String,
    pub file_size: u64,
}

/// Resolve the current owner from the persisted identity.
pub(crate) async fn current_owner(state: &AppState) -> AppResult<uuid::Uuid> {
    let identity = state.store.load_identity()?;
    match identity {
        Some(account) => Ok(account.id),
        None => Err(AppError::Core(CoreError::Unauthorized(
            "Log in before analyzing documents".to_string(),
        ))),
    }
}

/// POST /documents/analyze -- classify one file and append it to the history.
pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> AppResult<Json<DataResponse<Document>>> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let owner_id = current_owner(&state).await?;

    let descriptor = FileDescriptor::from_name(payload.filename.as_str(), payload.file_size);
    validate_upload(&descriptor)?;

    if state.config.analysis_delay_ms > 0 {
        tokio::time::sleep(std::time::Duration::from_millis(
            state.config.analysis_delay_ms,
        ))
        .await;
    }

    let document = {
        let mut rng = state.rng.lock().await;
        assembler::assemble(&descriptor, owner_id, &mut *rng)?
    };

    tracing::info!(
        filename = %document.filename,
        status = document.report.status.as_str(),
        confidence = document.report.confidence_score,
        "Document analyzed",
    );

    // Append to the in-memory history, then persist the mutation.
    let snapshot = {
        let mut history = state.history.write().await;
        history.push(document.clone());
        history.clone()
    };
    state.store.save_documents(&snapshot)?;

    Ok(Json(DataResponse { data: document }))
}

/// GET /documents -- the history, newest first.
pub async fn list_documents(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Document>>>> {
    let history = state.history.read().await;
    let mut documents: Vec<Document> = history.clone();
    documents.reverse();
    Ok(Json(DataResponse { data: documents }))
}
