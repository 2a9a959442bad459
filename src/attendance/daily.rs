//! Daily aggregation: merges an employee's latest time-in and time-out
//! punches for one date into a single `DailyRecord`.

use chrono::NaiveDate;

use crate::model::{ActionType, DailyRecord};
use crate::store::{AttendanceStore, StoreError};

/// Builds the daily record for `(employee_id, date)`.
///
/// The time-in punch anchors the day: without one this returns
/// `Ok(None)` even when a stray time-out row exists. With only a
/// time-in the record is incomplete (`hours_worked` is `None`) and
/// status/minutes come from the time-in; once a time-out exists it
/// supersedes the time-in's status because it reflects the full-day
/// outcome.
///
/// Hours are wall-clock time-of-day arithmetic within one calendar day.
/// An overnight shift is not handled and yields a negative duration.
pub async fn daily_record<S: AttendanceStore>(
    store: &S,
    employee_id: u64,
    date: NaiveDate,
) -> Result<Option<DailyRecord>, StoreError> {
    let time_ins = store
        .find_events_by_employee_date_action(employee_id, date, ActionType::TimeIn)
        .await?;
    let Some(time_in) = time_ins.first() else {
        return Ok(None);
    };

    let time_outs = store
        .find_events_by_employee_date_action(employee_id, date, ActionType::TimeOut)
        .await?;

    let record = match time_outs.first() {
        Some(time_out) => DailyRecord {
            date,
            time_in: time_in.time,
            time_out: Some(time_out.time),
            status: time_out.status,
            late_minutes: time_in.late_minutes,
            overtime_minutes: time_out.overtime_minutes,
            undertime_minutes: time_out.undertime_minutes,
            hours_worked: Some(hours_between(time_in.time, time_out.time)),
        },
        None => DailyRecord {
            date,
            time_in: time_in.time,
            time_out: None,
            status: time_in.status,
            late_minutes: time_in.late_minutes,
            overtime_minutes: time_in.overtime_minutes,
            undertime_minutes: time_in.undertime_minutes,
            hours_worked: None,
        },
    };

    Ok(Some(record))
}

/// Signed hour difference between two times of day, full precision.
pub(crate) fn hours_between(time_in: chrono::NaiveTime, time_out: chrono::NaiveTime) -> f64 {
    (time_out - time_in).num_seconds() as f64 / 3600.0
}
