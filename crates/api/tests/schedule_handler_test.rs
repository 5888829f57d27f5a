use std::sync::Arc;

use axum::extract::{Json, State};
use chrono::{Duration, NaiveDate};
use pretty_assertions::assert_eq;

use hiresync_api::handlers;
use hiresync_api::ApiState;
use hiresync_core::errors::ScheduleError;
use hiresync_core::mock::MockOracle;
use hiresync_core::models::availability::WeeklyTimeWindow;
use hiresync_core::models::schedule::{
    AvailabilityTexts, Candidate, JobPosting, MatchRequest, ScheduleRequest,
};
use hiresync_store::SessionStore;

fn window(day: &str, start: &str, end: &str) -> WeeklyTimeWindow {
    WeeklyTimeWindow {
        day: day.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
    }
}

fn state_with(oracle: MockOracle) -> Arc<ApiState> {
    Arc::new(ApiState {
        store: SessionStore::new(Duration::hours(1)),
        oracle: Arc::new(oracle),
        default_slot_minutes: 60,
    })
}

fn schedule_request(reference_date: NaiveDate) -> ScheduleRequest {
    ScheduleRequest {
        candidate: Candidate {
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
        },
        job: JobPosting {
            company: "TechCorp".to_string(),
            position: "Backend Engineer".to_string(),
            tone: "casual".to_string(),
        },
        availability: AvailabilityTexts {
            recruiter: "Monday 10am-4pm".to_string(),
            candidate: "Monday afternoons".to_string(),
        },
        min_duration_minutes: None,
        reference_date: Some(reference_date),
    }
}

// 2025-01-01 is a Wednesday
fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

#[test_log::test(tokio::test)]
async fn test_match_availability_returns_recommended_slot() {
    let state = state_with(MockOracle::new());

    let request = MatchRequest {
        recruiter_windows: vec![window("Monday", "10:00", "16:00")],
        candidate_windows: vec![window("Monday", "14:00", "18:00")],
        min_duration_minutes: None,
        reference_date: Some(reference_date()),
    };

    let Json(response) = handlers::schedule::match_availability(State(state), Json(request))
        .await
        .expect("well-formed request");

    assert!(response.success);
    assert_eq!(response.message, "Interview slots found");
    assert_eq!(response.session_id, None);

    let slot = response.recommended_slot.expect("one slot was found");
    assert_eq!(slot.day, "Monday");
    assert_eq!(slot.start_time, "14:00");
    assert_eq!(slot.end_time, "15:00");
    assert_eq!(slot.date, NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
    assert_eq!(response.available_slots.len(), 1);
}

#[tokio::test]
async fn test_match_availability_no_overlap_is_success_false() {
    let state = state_with(MockOracle::new());

    let request = MatchRequest {
        recruiter_windows: vec![window("Monday", "09:00", "10:00")],
        candidate_windows: vec![window("Tuesday", "09:00", "10:00")],
        min_duration_minutes: None,
        reference_date: Some(reference_date()),
    };

    let Json(response) = handlers::schedule::match_availability(State(state), Json(request))
        .await
        .expect("no overlap is not an error");

    assert!(!response.success);
    assert_eq!(response.message, "No matching availability found");
    assert!(response.available_slots.is_empty());
    assert!(response.recommended_slot.is_none());
}

#[tokio::test]
async fn test_match_availability_rejects_malformed_window() {
    let state = state_with(MockOracle::new());

    let request = MatchRequest {
        recruiter_windows: vec![window("Mon", "10:00", "16:00")],
        candidate_windows: vec![window("Monday", "14:00", "18:00")],
        min_duration_minutes: None,
        reference_date: Some(reference_date()),
    };

    let err = handlers::schedule::match_availability(State(state), Json(request))
        .await
        .expect_err("malformed window must abort the request");

    assert!(matches!(err.0, ScheduleError::Validation(_)));
}

#[tokio::test]
async fn test_match_availability_honors_custom_min_duration() {
    let state = state_with(MockOracle::new());

    // 30 minutes of shared time: too short at the default, fine at 30
    let request = MatchRequest {
        recruiter_windows: vec![window("Friday", "09:00", "09:30")],
        candidate_windows: vec![window("Friday", "09:00", "09:30")],
        min_duration_minutes: Some(30),
        reference_date: Some(reference_date()),
    };

    let Json(response) = handlers::schedule::match_availability(State(state), Json(request))
        .await
        .expect("well-formed request");

    assert!(response.success);
    let slot = response.recommended_slot.expect("one slot was found");
    assert_eq!(slot.start_time, "09:00");
    assert_eq!(slot.end_time, "09:30");
}

#[tokio::test]
async fn test_match_availability_rejects_unrepresentable_min_duration() {
    let state = state_with(MockOracle::new());

    // A minute count past chrono's representable range must surface as a
    // validation error, not a panic
    let request = MatchRequest {
        recruiter_windows: vec![window("Monday", "10:00", "16:00")],
        candidate_windows: vec![window("Monday", "14:00", "18:00")],
        min_duration_minutes: Some(i64::MAX),
        reference_date: Some(reference_date()),
    };

    let err = handlers::schedule::match_availability(State(state), Json(request))
        .await
        .expect_err("out-of-range duration must be rejected");

    match err.0 {
        ScheduleError::Validation(message) => {
            assert!(message.contains("min_duration_minutes"), "{}", message)
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_schedule_interview_rejects_unrepresentable_min_duration() {
    let mut oracle = MockOracle::new();
    oracle
        .expect_parse_availability()
        .returning(|_| Ok(vec![window("Monday", "10:00", "16:00")]));

    let state = state_with(oracle);
    let mut request = schedule_request(reference_date());
    request.min_duration_minutes = Some(i64::MIN);

    let err = handlers::schedule::schedule_interview(State(state), Json(request))
        .await
        .expect_err("out-of-range duration must be rejected");

    assert!(matches!(err.0, ScheduleError::Validation(_)));
}

#[test_log::test(tokio::test)]
async fn test_schedule_interview_creates_session() {
    let mut oracle = MockOracle::new();
    oracle
        .expect_parse_availability()
        .withf(|text| text == "Monday 10am-4pm")
        .returning(|_| Ok(vec![window("Monday", "10:00", "16:00")]));
    oracle
        .expect_parse_availability()
        .withf(|text| text == "Monday afternoons")
        .returning(|_| Ok(vec![window("Monday", "14:00", "18:00")]));

    let state = state_with(oracle);
    let request = schedule_request(reference_date());

    let Json(response) =
        handlers::schedule::schedule_interview(State(state.clone()), Json(request))
            .await
            .expect("well-formed request");

    assert!(response.success);
    let session_id = response.session_id.expect("session should be recorded");

    let session = state
        .store
        .get(session_id)
        .await
        .expect("session should be retrievable");
    assert_eq!(session.candidate.email, "jane@example.com");
    assert_eq!(session.available_slots, response.available_slots);

    // The response echoes what the parser understood
    assert_eq!(
        response.recruiter_parsed_availability,
        Some(vec![window("Monday", "10:00", "16:00")])
    );
    assert_eq!(
        response.candidate_parsed_availability,
        Some(vec![window("Monday", "14:00", "18:00")])
    );
}

#[tokio::test]
async fn test_schedule_interview_oracle_failure_degrades_to_no_availability() {
    let mut oracle = MockOracle::new();
    oracle
        .expect_parse_availability()
        .returning(|_| Err(eyre::eyre!("parser service unreachable")));

    let state = state_with(oracle);
    let request = schedule_request(reference_date());

    let Json(response) = handlers::schedule::schedule_interview(State(state.clone()), Json(request))
        .await
        .expect("oracle failure is not a request failure");

    assert!(!response.success);
    assert_eq!(response.message, "No matching availability found");
    assert_eq!(response.session_id, None);
    assert_eq!(response.recruiter_parsed_availability, Some(Vec::new()));
    assert_eq!(response.candidate_parsed_availability, Some(Vec::new()));
    assert!(state.store.is_empty().await);
}

#[tokio::test]
async fn test_schedule_interview_rejects_malformed_oracle_output() {
    let mut oracle = MockOracle::new();
    oracle
        .expect_parse_availability()
        .returning(|_| Ok(vec![window("Monday", "16:00", "10:00")]));

    let state = state_with(oracle);
    let request = schedule_request(reference_date());

    let err = handlers::schedule::schedule_interview(State(state), Json(request))
        .await
        .expect_err("inverted window from the oracle must be rejected");

    assert!(matches!(err.0, ScheduleError::Validation(_)));
}
