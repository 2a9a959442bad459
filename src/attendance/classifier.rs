//! Pure punch classification against the active time policy.
//!
//! Status is decided once, at write time, and embedded in the event row;
//! aggregation later re-reads it without re-deriving. Exactly one status
//! per punch, and minute fields are the positive distance from the
//! relevant boundary (zero when the boundary is not crossed).

use chrono::NaiveTime;

use crate::model::{Status, TimePolicy};

/// Outcome of classifying a single punch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub status: Status,
    pub late_minutes: u32,
    pub overtime_minutes: u32,
    pub undertime_minutes: u32,
}

impl Classification {
    fn status_only(status: Status) -> Self {
        Self {
            status,
            late_minutes: 0,
            overtime_minutes: 0,
            undertime_minutes: 0,
        }
    }
}

/// Classifies a time-in punch.
///
/// A punch at or before `official_time_in_start + grace` is on-time; the
/// grace boundary itself is inclusive. Late minutes count from the end
/// of the grace period, not from the official start.
pub fn classify_time_in(time: NaiveTime, policy: &TimePolicy) -> Classification {
    let deadline = policy.official_time_in_start
        + chrono::Duration::minutes(policy.grace_period_minutes as i64);

    if time > deadline {
        let late = (time - deadline).num_minutes().max(0) as u32;
        Classification {
            status: Status::Late,
            late_minutes: late,
            overtime_minutes: 0,
            undertime_minutes: 0,
        }
    } else {
        Classification::status_only(Status::OnTime)
    }
}

/// Classifies a time-out punch, given the day's time-in.
///
/// Past the official out it is overtime; otherwise the day is completed
/// when the required hours have elapsed since the time-in, undertime when
/// they have not. Overtime and undertime are anchored to opposite sides
/// of the official out, so they cannot co-occur.
pub fn classify_time_out(time: NaiveTime, time_in: NaiveTime, policy: &TimePolicy) -> Classification {
    if time > policy.official_time_out {
        let overtime = (time - policy.official_time_out).num_minutes().max(0) as u32;
        return Classification {
            status: Status::Overtime,
            late_minutes: 0,
            overtime_minutes: overtime,
            undertime_minutes: 0,
        };
    }

    let worked_minutes = (time - time_in).num_minutes();
    let required = policy.required_minutes();

    if worked_minutes >= required {
        Classification::status_only(Status::Completed)
    } else {
        Classification {
            status: Status::Undertime,
            late_minutes: 0,
            overtime_minutes: 0,
            undertime_minutes: (required - worked_minutes).max(0) as u32,
        }
    }
}
