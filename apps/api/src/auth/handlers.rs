//! Axum route handlers for the Accounts API.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::auth::service::{authenticate, register, LoginRequest, RegisterRequest};
use crate::errors::AppError;
use crate::models::account::AuthenticatedSession;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub status: &'static str,
}

/// POST /api/v1/accounts/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }
    if request.email.trim().is_empty() {
        return Err(AppError::Validation("email cannot be empty".to_string()));
    }

    register(&state.db, &state.hasher, &request).await?;

    Ok((StatusCode::CREATED, Json(RegisterResponse { status: "ok" })))
}

/// POST /api/v1/accounts/login
///
/// Returns the session identity the caller passes to later résumé calls.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthenticatedSession>, AppError> {
    let session = authenticate(&state.db, &state.hasher, &request).await?;
    Ok(Json(session))
}
