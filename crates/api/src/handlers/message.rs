use axum::{extract::State, Json};
use std::sync::Arc;

use hiresync_core::errors::ScheduleError;
use hiresync_core::models::message::{CandidateMessage, EmailPayload};

use crate::{middleware::error_handling::AppError, ApiState};

/// Builds the email envelope for a candidate-facing message.
///
/// # Endpoint
///
/// ```text
/// POST /api/messages
/// ```
///
/// The request body is a tagged [`CandidateMessage`]; invite and reschedule
/// messages carry interview details by construction, so a payload with a
/// missing or unknown `type` never reaches this handler. Body text and
/// delivery are the mail collaborator's job — this endpoint only returns the
/// validated envelope (recipient, subject, typed details).
#[axum::debug_handler]
pub async fn compose_message(
    State(_state): State<Arc<ApiState>>,
    Json(message): Json<CandidateMessage>,
) -> Result<Json<EmailPayload>, AppError> {
    if message.candidate().email.trim().is_empty() {
        return Err(AppError(ScheduleError::Validation(
            "candidate email must not be empty".to_string(),
        )));
    }

    Ok(Json(EmailPayload::from(&message)))
}
