use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use hiresync_core::errors::ScheduleError;
use hiresync_store::models::StoredSession;

use crate::{middleware::error_handling::AppError, ApiState};

#[derive(Debug, Serialize)]
pub struct DeleteSessionResponse {
    pub deleted: bool,
}

/// Fetches a scheduling session by ID.
///
/// Expired sessions are reported as not found, same as unknown IDs.
#[axum::debug_handler]
pub async fn get_session(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<StoredSession>, AppError> {
    let session = state
        .store
        .get(id)
        .await
        .ok_or_else(|| ScheduleError::NotFound(format!("Session with ID {} not found", id)))?;

    Ok(Json(session))
}

/// Deletes a scheduling session by ID.
#[axum::debug_handler]
pub async fn delete_session(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteSessionResponse>, AppError> {
    if !state.store.delete(id).await {
        return Err(AppError(ScheduleError::NotFound(format!(
            "Session with ID {} not found",
            id
        ))));
    }

    Ok(Json(DeleteSessionResponse { deleted: true }))
}
