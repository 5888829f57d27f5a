use serde::{Deserialize, Serialize};

use crate::models::schedule::{Candidate, JobPosting};

/// Date and time of a booked interview, carried by invite and reschedule
/// messages. Times are `HH:MM`, date is `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewDetails {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

/// A candidate-facing message, typed by purpose.
///
/// The tagged representation replaces the free-form JSON that used to flow
/// between the scheduling and communication steps: invite and reschedule
/// messages cannot be constructed without interview details, and an unknown
/// `type` is rejected at deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CandidateMessage {
    InterviewInvite {
        candidate: Candidate,
        job: JobPosting,
        interview_details: InterviewDetails,
    },
    Rejection {
        candidate: Candidate,
        job: JobPosting,
    },
    Followup {
        candidate: Candidate,
        job: JobPosting,
    },
    Reschedule {
        candidate: Candidate,
        job: JobPosting,
        interview_details: InterviewDetails,
    },
}

impl CandidateMessage {
    pub fn candidate(&self) -> &Candidate {
        match self {
            Self::InterviewInvite { candidate, .. }
            | Self::Rejection { candidate, .. }
            | Self::Followup { candidate, .. }
            | Self::Reschedule { candidate, .. } => candidate,
        }
    }

    pub fn job(&self) -> &JobPosting {
        match self {
            Self::InterviewInvite { job, .. }
            | Self::Rejection { job, .. }
            | Self::Followup { job, .. }
            | Self::Reschedule { job, .. } => job,
        }
    }

    pub fn interview_details(&self) -> Option<&InterviewDetails> {
        match self {
            Self::InterviewInvite {
                interview_details, ..
            }
            | Self::Reschedule {
                interview_details, ..
            } => Some(interview_details),
            Self::Rejection { .. } | Self::Followup { .. } => None,
        }
    }

    pub fn message_type(&self) -> &'static str {
        match self {
            Self::InterviewInvite { .. } => "interview_invite",
            Self::Rejection { .. } => "rejection",
            Self::Followup { .. } => "followup",
            Self::Reschedule { .. } => "reschedule",
        }
    }

    /// Subject line for the outgoing email, per message type.
    pub fn subject_line(&self) -> String {
        let job = self.job();
        match self {
            Self::InterviewInvite { .. } => {
                format!("Interview Invitation - {} at {}", job.position, job.company)
            }
            Self::Rejection { .. } => {
                format!(
                    "Update on Your {} Application - {}",
                    job.position, job.company
                )
            }
            Self::Followup { .. } => {
                format!("Follow-up: {} Application at {}", job.position, job.company)
            }
            Self::Reschedule { .. } => {
                format!("Interview Reschedule - {} at {}", job.position, job.company)
            }
        }
    }
}

/// Envelope handed to the external mail collaborator. Body composition and
/// delivery happen outside this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailPayload {
    pub to_email: String,
    pub subject: String,
    pub message_type: String,
    pub candidate: Candidate,
    pub job: JobPosting,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_details: Option<InterviewDetails>,
}

impl From<&CandidateMessage> for EmailPayload {
    fn from(message: &CandidateMessage) -> Self {
        Self {
            to_email: message.candidate().email.clone(),
            subject: message.subject_line(),
            message_type: message.message_type().to_string(),
            candidate: message.candidate().clone(),
            job: message.job().clone(),
            interview_details: message.interview_details().cloned(),
        }
    }
}
