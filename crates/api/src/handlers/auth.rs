//! Auth handlers: credential resolution and identity persistence.
//!
//! Identity is resolved by the demo provider and persisted in the session
//! store; the analysis handlers read it back as the document owner.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use trustseal_store::{AuthProvider, SessionStore, UserAccount};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

/// Body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 128, message = "must be 1-128 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

/// POST /auth/login -- resolve credentials and persist the identity.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<UserAccount>>> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let account = state.auth.login(&payload.email, &payload.password)?;
    state.store.save_identity(&account)?;

    tracing::info!(email = %account.email, role = account.role.as_str(), "User logged in");

    Ok(Json(DataResponse { data: account }))
}

/// POST /auth/register -- create a demo account and persist it.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<Json<DataResponse<UserAccount>>> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let account = state
        .auth
        .register(&payload.name, &payload.email, &payload.password)?;
    state.store.save_identity(&account)?;

    tracing::info!(email = %account.email, "User registered");

    Ok(Json(DataResponse { data: account }))
}

/// POST /auth/logout -- clear the persisted identity.
pub async fn logout(State(state): State<AppState>) -> AppResult<StatusCode> {
    state.store.clear_identity()?;
    Ok(StatusCode::NO_CONTENT)
}
