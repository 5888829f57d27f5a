use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A recurring single-weekday block of availability.
///
/// Produced by the availability-parsing oracle from free text, or supplied
/// directly by a caller. Treated as untrusted until validated by the matcher:
/// `day` must be a canonical English weekday name and `start_time` must fall
/// strictly before `end_time`, both in 24-hour `HH:MM` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyTimeWindow {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

/// The intersection of one recruiter window and one candidate window on the
/// same weekday, truncated to exactly the minimum bookable duration starting
/// at the later of the two start times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapWindow {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

/// An overlap window projected onto the next calendar occurrence of its
/// weekday, strictly after the reference date.
///
/// Datetimes are naive local time; no timezone conversion is performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedInterviewSlot {
    pub day: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub datetime_start: NaiveDateTime,
    pub datetime_end: NaiveDateTime,
}
