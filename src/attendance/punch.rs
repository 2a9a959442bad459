//! Punch recording: classifies a time-in/time-out against the active
//! policy and appends the event row with its status already embedded.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::model::{ActionType, AttendanceEvent, NewAttendanceEvent};
use crate::store::{AttendanceStore, StoreError};

use super::classifier::{classify_time_in, classify_time_out};

#[derive(Debug, Error)]
pub enum PunchError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// No time policy row exists yet; punches cannot be classified.
    #[error("no active time policy configured")]
    NoActivePolicy,

    /// A time-out was scanned before any time-in for that day.
    #[error("no time-in recorded for this day")]
    MissingTimeIn,
}

/// Records a punch for `(employee_id, date, time)` and returns the
/// stored event. The status and minute fields are derived here, once,
/// and written with the row; queries never re-classify.
pub async fn record_punch<S: AttendanceStore>(
    store: &S,
    employee_id: u64,
    date: NaiveDate,
    time: NaiveTime,
    action: ActionType,
) -> Result<AttendanceEvent, PunchError> {
    let policy = store
        .find_active_policy()
        .await?
        .ok_or(PunchError::NoActivePolicy)?;

    let classification = match action {
        ActionType::TimeIn => classify_time_in(time, &policy),
        ActionType::TimeOut => {
            let time_ins = store
                .find_events_by_employee_date_action(employee_id, date, ActionType::TimeIn)
                .await?;
            let time_in = time_ins.first().ok_or(PunchError::MissingTimeIn)?;
            classify_time_out(time, time_in.time, &policy)
        }
    };

    let new_event = NewAttendanceEvent {
        employee_id,
        date,
        action_type: action,
        time,
        status: classification.status,
        late_minutes: classification.late_minutes,
        overtime_minutes: classification.overtime_minutes,
        undertime_minutes: classification.undertime_minutes,
    };

    let event_id = store.insert_event(new_event.clone()).await?;

    tracing::info!(
        employee_id,
        %date,
        action = %action,
        status = %classification.status,
        "Punch recorded"
    );

    Ok(AttendanceEvent {
        event_id,
        employee_id,
        date,
        action_type: action,
        time,
        status: classification.status,
        late_minutes: classification.late_minutes,
        overtime_minutes: classification.overtime_minutes,
        undertime_minutes: classification.undertime_minutes,
        created_at: date.and_time(time),
    })
}
