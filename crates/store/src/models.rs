use chrono::{DateTime, Utc};
use hiresync_core::models::availability::DatedInterviewSlot;
use hiresync_core::models::schedule::{Candidate, JobPosting};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One scheduling session: the candidate/job pair plus the slots found for
/// them. Lives only in process memory until its TTL runs out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub id: Uuid,
    pub candidate: Candidate,
    pub job: JobPosting,
    pub recommended_slot: Option<DatedInterviewSlot>,
    pub available_slots: Vec<DatedInterviewSlot>,
    pub created_at: DateTime<Utc>,
}
