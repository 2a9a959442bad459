//! In-memory store used by unit and handler tests. Mirrors the SQL
//! store's ordering guarantees.

use std::sync::Mutex;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::model::{ActionType, AttendanceEvent, NewAttendanceEvent, Status, TimePolicy};

use super::{AttendanceStore, StoreError};

#[derive(Default)]
pub struct MemStore {
    events: Mutex<Vec<AttendanceEvent>>,
    policy: Mutex<Option<TimePolicy>>,
    fail_reads: bool,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every read fails, for error-propagation tests.
    pub fn failing() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn set_policy(&self, policy: TimePolicy) {
        *self.policy.lock().unwrap() = Some(policy);
    }

    pub fn push_event(&self, event: AttendanceEvent) {
        self.events.lock().unwrap().push(event);
    }

    /// Shorthand for seeding a punch row.
    #[allow(clippy::too_many_arguments)]
    pub fn seed(
        &self,
        employee_id: u64,
        date: &str,
        action_type: ActionType,
        time: &str,
        status: Status,
        late_minutes: u32,
        overtime_minutes: u32,
        undertime_minutes: u32,
    ) {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        let time = NaiveTime::parse_from_str(time, "%H:%M").unwrap();
        let seq = self.events.lock().unwrap().len() as u64;
        self.push_event(AttendanceEvent {
            event_id: seq + 1,
            employee_id,
            date,
            action_type,
            time,
            status,
            late_minutes,
            overtime_minutes,
            undertime_minutes,
            // later punches get later created_at stamps
            created_at: date.and_hms_opt(0, 0, 0).unwrap() + chrono::Duration::seconds(seq as i64),
        });
    }

    fn check_fail(&self) -> Result<(), StoreError> {
        if self.fail_reads {
            Err(StoreError::Database(sqlx::Error::PoolClosed))
        } else {
            Ok(())
        }
    }
}

impl AttendanceStore for MemStore {
    async fn find_events_by_employee_date_action(
        &self,
        employee_id: u64,
        date: NaiveDate,
        action: ActionType,
    ) -> Result<Vec<AttendanceEvent>, StoreError> {
        self.check_fail()?;
        let mut rows: Vec<_> = self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.employee_id == employee_id && e.date == date && e.action_type == action)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn find_events_by_employee_month(
        &self,
        employee_id: u64,
        month: u32,
        year: i32,
        action: Option<ActionType>,
        status: Option<Status>,
    ) -> Result<Vec<AttendanceEvent>, StoreError> {
        use chrono::Datelike;

        self.check_fail()?;
        let mut rows: Vec<_> = self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| {
                e.employee_id == employee_id
                    && e.date.month() == month
                    && e.date.year() == year
                    && action.is_none_or(|a| e.action_type == a)
                    && status.is_none_or(|s| e.status == s)
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(rows)
    }

    async fn find_active_policy(&self) -> Result<Option<TimePolicy>, StoreError> {
        self.check_fail()?;
        Ok(self.policy.lock().unwrap().clone())
    }

    async fn insert_event(&self, event: NewAttendanceEvent) -> Result<u64, StoreError> {
        self.check_fail()?;
        let mut events = self.events.lock().unwrap();
        let event_id = events.len() as u64 + 1;
        let created_at = NaiveDateTime::new(event.date, event.time);
        events.push(AttendanceEvent {
            event_id,
            employee_id: event.employee_id,
            date: event.date,
            action_type: event.action_type,
            time: event.time,
            status: event.status,
            late_minutes: event.late_minutes,
            overtime_minutes: event.overtime_minutes,
            undertime_minutes: event.undertime_minutes,
            created_at,
        });
        Ok(event_id)
    }
}

/// Standard test policy: 08:00 start, 15 min grace, 17:00 out, 8 hours.
pub fn test_policy() -> TimePolicy {
    TimePolicy {
        policy_id: 1,
        required_hours: 8.0,
        grace_period_minutes: 15,
        official_time_in_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        official_time_out: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
    }
}
