//! # Availability Matcher
//!
//! Pure functions that match recruiter availability against candidate
//! availability and turn the overlaps into concrete interview slots.
//!
//! ## Algorithm
//!
//! Matching runs in three stages:
//!
//! 1. Validation: every window from both sides is checked (canonical weekday
//!    name, `HH:MM` times, start strictly before end). A single malformed
//!    window aborts the whole request — a scheduling decision built on
//!    partially-invalid input is unsafe to act on.
//! 2. Overlap computation: an O(N×M) nested pass over (recruiter, candidate)
//!    pairs, recruiter-major. Pairs on the same weekday whose intersection is
//!    at least the minimum duration emit an [`OverlapWindow`] truncated to
//!    exactly that minimum, anchored at the later of the two start times. A
//!    recommended slot is always exactly the minimum bookable length.
//! 3. Date projection: each overlap is projected onto the next calendar
//!    occurrence of its weekday strictly after the reference date. A window
//!    on the reference date's own weekday rolls forward a full seven days.
//!
//! Results keep discovery order. Duplicate (day, start, end) triples arising
//! from multiple window pairs are kept as-is, and the recommended slot is the
//! first discovered one; callers relying on a different ranking must sort
//! themselves.
//!
//! The matcher never reads the system clock — `reference_date` is an
//! explicit input, which keeps the whole computation deterministic.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};

use crate::errors::{SchedResult, ScheduleError};
use crate::models::availability::{DatedInterviewSlot, OverlapWindow, WeeklyTimeWindow};

/// Canonical weekday names, Monday-first. Matching is case-sensitive.
const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const TIME_FORMAT: &str = "%H:%M";

/// Outcome of a full matching run: the ordered slot list plus the
/// first-discovered slot as the recommended pick.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub success: bool,
    pub recommended_slot: Option<DatedInterviewSlot>,
    pub available_slots: Vec<DatedInterviewSlot>,
}

/// Monday-first index of a canonical weekday name.
fn weekday_index(day: &str) -> Option<i64> {
    DAY_NAMES.iter().position(|d| *d == day).map(|i| i as i64)
}

/// A window validated into chrono types, ready for interval math.
struct ParsedWindow<'a> {
    day: &'a str,
    start: NaiveTime,
    end: NaiveTime,
}

fn parse_time(side: &str, index: usize, field: &str, value: &str) -> SchedResult<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|_| {
        ScheduleError::Validation(format!(
            "{} window {}: {} '{}' is not a valid HH:MM time",
            side, index, field, value
        ))
    })
}

/// Validates one side's windows, reporting the side, index, and field of the
/// first malformed entry.
fn validate_windows<'a>(
    side: &str,
    windows: &'a [WeeklyTimeWindow],
) -> SchedResult<Vec<ParsedWindow<'a>>> {
    let mut parsed = Vec::with_capacity(windows.len());
    for (index, window) in windows.iter().enumerate() {
        if weekday_index(&window.day).is_none() {
            return Err(ScheduleError::Validation(format!(
                "{} window {}: day '{}' is not a canonical weekday name",
                side, index, window.day
            )));
        }
        let start = parse_time(side, index, "start_time", &window.start_time)?;
        let end = parse_time(side, index, "end_time", &window.end_time)?;
        if start >= end {
            return Err(ScheduleError::Validation(format!(
                "{} window {}: start_time {} must be before end_time {}",
                side, index, window.start_time, window.end_time
            )));
        }
        parsed.push(ParsedWindow {
            day: &window.day,
            start,
            end,
        });
    }
    Ok(parsed)
}

/// Finds all same-day overlaps of at least `min_duration` between recruiter
/// and candidate windows.
///
/// Each emitted window is truncated to exactly `min_duration`, starting at
/// the later of the two start times. Output order is recruiter-major
/// discovery order; no sorting or deduplication is applied. Empty input on
/// either side yields an empty result, not an error.
///
/// # Errors
///
/// * `ScheduleError::Validation` - a window is malformed (bad day name,
///   unparsable time, start at or after end), or `min_duration` is not
///   strictly positive
pub fn find_overlaps(
    recruiter_windows: &[WeeklyTimeWindow],
    candidate_windows: &[WeeklyTimeWindow],
    min_duration: Duration,
) -> SchedResult<Vec<OverlapWindow>> {
    if min_duration <= Duration::zero() {
        return Err(ScheduleError::Validation(
            "minimum slot duration must be positive".to_string(),
        ));
    }

    let recruiter = validate_windows("recruiter", recruiter_windows)?;
    let candidate = validate_windows("candidate", candidate_windows)?;

    let mut overlaps = Vec::new();
    for r in &recruiter {
        for c in &candidate {
            // Only same-weekday pairs can overlap
            if r.day != c.day {
                continue;
            }

            let overlap_start = r.start.max(c.start);
            let overlap_end = r.end.min(c.end);

            if overlap_end - overlap_start >= min_duration {
                overlaps.push(OverlapWindow {
                    day: r.day.to_string(),
                    start_time: overlap_start.format(TIME_FORMAT).to_string(),
                    end_time: (overlap_start + min_duration).format(TIME_FORMAT).to_string(),
                });
            }
        }
    }

    Ok(overlaps)
}

/// Projects each overlap window onto the next calendar occurrence of its
/// weekday, strictly after `reference_date`.
///
/// If the window's weekday equals the reference date's weekday, the slot
/// lands a full seven days out — never on the reference date itself. Output
/// order matches input order; no re-sort by date.
///
/// # Errors
///
/// * `ScheduleError::InvalidDayName` - a window's day is not one of the seven
///   canonical names (defensive re-check of upstream parsing)
/// * `ScheduleError::Validation` - a window's times fail to parse
pub fn project_to_dates(
    overlap_windows: &[OverlapWindow],
    reference_date: NaiveDate,
) -> SchedResult<Vec<DatedInterviewSlot>> {
    let today_index = reference_date.weekday().num_days_from_monday() as i64;

    let mut slots = Vec::with_capacity(overlap_windows.len());
    for window in overlap_windows {
        let target_index = weekday_index(&window.day)
            .ok_or_else(|| ScheduleError::InvalidDayName(window.day.clone()))?;

        let mut days_ahead = target_index - today_index;
        if days_ahead <= 0 {
            days_ahead += 7;
        }
        let date = reference_date + Duration::days(days_ahead);

        let start = parse_time("overlap", slots.len(), "start_time", &window.start_time)?;
        let end = parse_time("overlap", slots.len(), "end_time", &window.end_time)?;

        slots.push(DatedInterviewSlot {
            day: window.day.clone(),
            date,
            start_time: window.start_time.clone(),
            end_time: window.end_time.clone(),
            datetime_start: date.and_time(start),
            datetime_end: date.and_time(end),
        });
    }

    Ok(slots)
}

/// Runs the full matching pipeline: overlap computation followed by date
/// projection.
///
/// The recommended slot is the first element of the ordered result list —
/// a pure first-match policy.
pub fn match_slots(
    recruiter_windows: &[WeeklyTimeWindow],
    candidate_windows: &[WeeklyTimeWindow],
    min_duration: Duration,
    reference_date: NaiveDate,
) -> SchedResult<MatchOutcome> {
    let overlaps = find_overlaps(recruiter_windows, candidate_windows, min_duration)?;
    let available_slots = project_to_dates(&overlaps, reference_date)?;

    Ok(MatchOutcome {
        success: !available_slots.is_empty(),
        recommended_slot: available_slots.first().cloned(),
        available_slots,
    })
}
