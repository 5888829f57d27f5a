use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::availability::{DatedInterviewSlot, WeeklyTimeWindow};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub company: String,
    pub position: String,
    /// Communication tone the company wants in candidate-facing messages
    /// (e.g. "professional", "casual"). Defaults to "professional".
    #[serde(default = "default_tone")]
    pub tone: String,
}

fn default_tone() -> String {
    "professional".to_string()
}

/// Free-text availability for both sides of an interview, as entered by the
/// recruiter. Translated into structured windows by the oracle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityTexts {
    pub recruiter: String,
    pub candidate: String,
}

/// Request body for `POST /api/schedule` (free-text availability).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub candidate: Candidate,
    pub job: JobPosting,
    pub availability: AvailabilityTexts,
    /// Minimum bookable slot length. Falls back to the server-configured
    /// default (normally 60 minutes) when omitted.
    pub min_duration_minutes: Option<i64>,
    /// "Today" for date projection. Defaults to the current date, read once
    /// at the request boundary; injectable for deterministic tests.
    pub reference_date: Option<NaiveDate>,
}

/// Request body for `POST /api/schedule/match` (pre-structured windows).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub recruiter_windows: Vec<WeeklyTimeWindow>,
    pub candidate_windows: Vec<WeeklyTimeWindow>,
    pub min_duration_minutes: Option<i64>,
    pub reference_date: Option<NaiveDate>,
}

/// Response for both scheduling endpoints.
///
/// `recommended_slot` is the first discovered overlap, in recruiter-major
/// discovery order; no further ranking is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub success: bool,
    pub message: String,
    pub recommended_slot: Option<DatedInterviewSlot>,
    pub available_slots: Vec<DatedInterviewSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<Candidate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<JobPosting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recruiter_parsed_availability: Option<Vec<WeeklyTimeWindow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_parsed_availability: Option<Vec<WeeklyTimeWindow>>,
}
