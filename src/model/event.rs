use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Classification of a single punch against the active time policy.
///
/// Stored per event at write time and re-read at query time. Rows written
/// by older clients may carry strings outside this set; those decode to
/// `Unknown` instead of failing the whole query.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Status {
    OnTime,
    Late,
    Overtime,
    Undertime,
    Completed,
    Unknown,
}

impl Status {
    /// Lenient decode for strings coming out of the database.
    pub fn from_stored(s: &str) -> Self {
        Status::from_str(s).unwrap_or(Status::Unknown)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ActionType {
    TimeIn,
    TimeOut,
}

/// One time-in or time-out punch, immutable once written.
///
/// Multiple punches may exist per (employee, date, action); only the
/// latest by `created_at` is authoritative for aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendanceEvent {
    pub event_id: u64,
    pub employee_id: u64,

    #[schema(value_type = String, format = "date")]
    pub date: NaiveDate,

    pub action_type: ActionType,

    #[schema(value_type = String, example = "08:10:00")]
    pub time: NaiveTime,

    pub status: Status,
    pub late_minutes: u32,
    pub overtime_minutes: u32,
    pub undertime_minutes: u32,

    #[schema(value_type = String, format = "date-time")]
    pub created_at: NaiveDateTime,
}

/// Punch about to be recorded; the id and created_at come from the database.
#[derive(Debug, Clone)]
pub struct NewAttendanceEvent {
    pub employee_id: u64,
    pub date: NaiveDate,
    pub action_type: ActionType,
    pub time: NaiveTime,
    pub status: Status,
    pub late_minutes: u32,
    pub overtime_minutes: u32,
    pub undertime_minutes: u32,
}
