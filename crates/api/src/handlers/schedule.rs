//! # Scheduling Handlers
//!
//! Handlers for the two scheduling entry points:
//!
//! - `POST /api/schedule/match` takes pre-structured availability windows and
//!   runs the matcher directly.
//! - `POST /api/schedule` takes free-text availability for both sides, has
//!   the oracle translate each into windows, runs the matcher, and records a
//!   scheduling session for later follow-up.
//!
//! The matcher itself is pure; the only clock read happens here, once per
//! request, when the caller does not supply a `reference_date`. Oracle
//! failures degrade to "zero windows" so an unusable parse surfaces as a
//! no-availability outcome instead of a hard error.

use axum::{extract::State, Json};
use chrono::{Duration, NaiveDate, Utc};
use std::sync::Arc;

use hiresync_core::errors::ScheduleError;
use hiresync_core::matcher;
use hiresync_core::models::availability::WeeklyTimeWindow;
use hiresync_core::models::schedule::{MatchRequest, ScheduleRequest, ScheduleResponse};

use crate::{middleware::error_handling::AppError, ApiState};

const SLOTS_FOUND: &str = "Interview slots found";
const NO_AVAILABILITY: &str = "No matching availability found";

fn reference_date_or_today(requested: Option<NaiveDate>) -> NaiveDate {
    // Read the clock once at the boundary; the matcher never reads it
    requested.unwrap_or_else(|| Utc::now().date_naive())
}

/// Resolves the requested minimum slot length against the configured
/// default, rejecting values chrono cannot represent.
fn resolve_min_duration(
    requested_minutes: Option<i64>,
    default_minutes: i64,
) -> Result<Duration, ScheduleError> {
    let minutes = requested_minutes.unwrap_or(default_minutes);
    Duration::try_minutes(minutes).ok_or_else(|| {
        ScheduleError::Validation(format!(
            "min_duration_minutes {} is out of range",
            minutes
        ))
    })
}

/// Matches pre-structured recruiter and candidate windows.
///
/// # Endpoint
///
/// ```text
/// POST /api/schedule/match
/// ```
///
/// # Errors
///
/// * `ScheduleError::Validation` - a window is malformed or the minimum
///   duration is not positive
#[axum::debug_handler]
pub async fn match_availability(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<MatchRequest>,
) -> Result<Json<ScheduleResponse>, AppError> {
    let reference_date = reference_date_or_today(payload.reference_date);
    let min_duration =
        resolve_min_duration(payload.min_duration_minutes, state.default_slot_minutes)?;

    let outcome = matcher::match_slots(
        &payload.recruiter_windows,
        &payload.candidate_windows,
        min_duration,
        reference_date,
    )?;

    let message = if outcome.success {
        SLOTS_FOUND
    } else {
        NO_AVAILABILITY
    };

    Ok(Json(ScheduleResponse {
        success: outcome.success,
        message: message.to_string(),
        recommended_slot: outcome.recommended_slot,
        available_slots: outcome.available_slots,
        session_id: None,
        candidate: None,
        job: None,
        recruiter_parsed_availability: None,
        candidate_parsed_availability: None,
    }))
}

/// Asks the oracle to parse one side's availability text, degrading to zero
/// windows when the parser service fails.
async fn parse_side(state: &ApiState, side: &str, text: &str) -> Vec<WeeklyTimeWindow> {
    match state.oracle.parse_availability(text).await {
        Ok(windows) => windows,
        Err(err) => {
            tracing::warn!("{} availability parse failed, treating as empty: {}", side, err);
            Vec::new()
        }
    }
}

/// Schedules an interview from free-text availability descriptions.
///
/// # Endpoint
///
/// ```text
/// POST /api/schedule
/// ```
///
/// The oracle translates each side's text into weekly windows; the matcher
/// validates those windows and computes dated slots. On success a session is
/// recorded in the store and its ID returned for follow-up calls. The
/// response echoes both parsed availability lists so the caller can show
/// what the parser understood.
///
/// # Errors
///
/// * `ScheduleError::Validation` - the oracle produced a malformed window or
///   the minimum duration is not positive
#[axum::debug_handler]
pub async fn schedule_interview(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ScheduleRequest>,
) -> Result<Json<ScheduleResponse>, AppError> {
    // Translate both availability texts through the oracle
    let recruiter_windows = parse_side(&state, "recruiter", &payload.availability.recruiter).await;
    let candidate_windows = parse_side(&state, "candidate", &payload.availability.candidate).await;

    let reference_date = reference_date_or_today(payload.reference_date);
    let min_duration =
        resolve_min_duration(payload.min_duration_minutes, state.default_slot_minutes)?;

    // Oracle output is untrusted; the matcher validates it
    let outcome = matcher::match_slots(
        &recruiter_windows,
        &candidate_windows,
        min_duration,
        reference_date,
    )?;

    if !outcome.success {
        return Ok(Json(ScheduleResponse {
            success: false,
            message: NO_AVAILABILITY.to_string(),
            recommended_slot: None,
            available_slots: Vec::new(),
            session_id: None,
            candidate: Some(payload.candidate),
            job: Some(payload.job),
            recruiter_parsed_availability: Some(recruiter_windows),
            candidate_parsed_availability: Some(candidate_windows),
        }));
    }

    // Record the session so the communication step can pick it up later
    let session = state
        .store
        .create(
            payload.candidate.clone(),
            payload.job.clone(),
            outcome.recommended_slot.clone(),
            outcome.available_slots.clone(),
        )
        .await;

    Ok(Json(ScheduleResponse {
        success: true,
        message: SLOTS_FOUND.to_string(),
        recommended_slot: outcome.recommended_slot,
        available_slots: outcome.available_slots,
        session_id: Some(session.id),
        candidate: Some(payload.candidate),
        job: Some(payload.job),
        recruiter_parsed_availability: Some(recruiter_windows),
        candidate_parsed_availability: Some(candidate_windows),
    }))
}
