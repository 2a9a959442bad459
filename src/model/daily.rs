use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use utoipa::ToSchema;

use super::Status;

/// One employee-day, merged from the latest time-in and time-out punches.
///
/// Derived per query and discarded after serialization; never persisted.
/// When the time-out is missing the day is incomplete and `hours_worked`
/// is not computable.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DailyRecord {
    #[schema(value_type = String, format = "date")]
    pub date: NaiveDate,

    #[serde(rename = "timeIn")]
    #[schema(value_type = String, example = "08:10:00")]
    pub time_in: NaiveTime,

    #[serde(rename = "timeOut")]
    #[schema(value_type = Option<String>, example = "17:30:00")]
    pub time_out: Option<NaiveTime>,

    pub status: Status,

    #[serde(rename = "lateMinutes")]
    pub late_minutes: u32,

    #[serde(rename = "overtimeMinutes")]
    pub overtime_minutes: u32,

    #[serde(rename = "undertimeMinutes")]
    pub undertime_minutes: u32,

    /// Wall-clock hours between time-in and time-out, full precision.
    /// `None` while the day is incomplete.
    #[serde(rename = "hoursWorked")]
    pub hours_worked: Option<f64>,
}

impl DailyRecord {
    pub fn is_complete(&self) -> bool {
        self.time_out.is_some()
    }
}
