use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sqlx::MySqlPool;

use crate::model::{ActionType, AttendanceEvent, NewAttendanceEvent, Status, TimePolicy};

use super::{AttendanceStore, StoreError};

/// MySQL-backed store over a shared connection pool.
#[derive(Clone)]
pub struct SqlStore {
    pool: MySqlPool,
}

impl SqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

/// Raw attendance row as stored. Status arrives as free text and is
/// decoded leniently into the closed enum.
#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    attendance_id: u64,
    employee_id: u64,
    attendance_date: NaiveDate,
    action_type: String,
    time: NaiveTime,
    status: String,
    late_minutes: i32,
    overtime_minutes: i32,
    undertime_minutes: i32,
    created_at: NaiveDateTime,
}

impl EventRow {
    fn into_event(self) -> AttendanceEvent {
        let action_type = match self.action_type.as_str() {
            "time-out" => ActionType::TimeOut,
            _ => ActionType::TimeIn,
        };

        AttendanceEvent {
            event_id: self.attendance_id,
            employee_id: self.employee_id,
            date: self.attendance_date,
            action_type,
            time: self.time,
            status: Status::from_stored(&self.status),
            late_minutes: self.late_minutes.max(0) as u32,
            overtime_minutes: self.overtime_minutes.max(0) as u32,
            undertime_minutes: self.undertime_minutes.max(0) as u32,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PolicyRow {
    policy_id: u64,
    required_hours: f64,
    grace_period_minutes: i32,
    official_time_in_start: NaiveTime,
    official_time_out: NaiveTime,
}

const EVENT_COLUMNS: &str = "attendance_id, employee_id, attendance_date, action_type, \
     time, status, late_minutes, overtime_minutes, undertime_minutes, created_at";

impl AttendanceStore for SqlStore {
    async fn find_events_by_employee_date_action(
        &self,
        employee_id: u64,
        date: NaiveDate,
        action: ActionType,
    ) -> Result<Vec<AttendanceEvent>, StoreError> {
        let sql = format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM attendance
            WHERE employee_id = ? AND attendance_date = ? AND action_type = ?
            ORDER BY created_at DESC
            "#
        );

        let rows = sqlx::query_as::<_, EventRow>(&sql)
            .bind(employee_id)
            .bind(date)
            .bind(action.to_string())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(EventRow::into_event).collect())
    }

    async fn find_events_by_employee_month(
        &self,
        employee_id: u64,
        month: u32,
        year: i32,
        action: Option<ActionType>,
        status: Option<Status>,
    ) -> Result<Vec<AttendanceEvent>, StoreError> {
        // Optional filters appended the same way build_update_sql grows
        // its SET clause: SQL text first, binds in matching order.
        let mut sql = format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM attendance
            WHERE employee_id = ? AND MONTH(attendance_date) = ? AND YEAR(attendance_date) = ?
            "#
        );
        if action.is_some() {
            sql.push_str(" AND action_type = ?");
        }
        if status.is_some() {
            sql.push_str(" AND status = ?");
        }
        sql.push_str(" ORDER BY attendance_date DESC, created_at DESC");

        let mut query = sqlx::query_as::<_, EventRow>(&sql)
            .bind(employee_id)
            .bind(month)
            .bind(year);
        if let Some(action) = action {
            query = query.bind(action.to_string());
        }
        if let Some(status) = status {
            query = query.bind(status.to_string());
        }

        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(EventRow::into_event).collect())
    }

    async fn find_active_policy(&self) -> Result<Option<TimePolicy>, StoreError> {
        let row = sqlx::query_as::<_, PolicyRow>(
            r#"
            SELECT policy_id, required_hours, grace_period_minutes,
                   official_time_in_start, official_time_out
            FROM time_policy
            ORDER BY policy_id DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|p| TimePolicy {
            policy_id: p.policy_id,
            required_hours: p.required_hours,
            grace_period_minutes: p.grace_period_minutes.max(0) as u32,
            official_time_in_start: p.official_time_in_start,
            official_time_out: p.official_time_out,
        }))
    }

    async fn insert_event(&self, event: NewAttendanceEvent) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO attendance
            (employee_id, attendance_date, action_type, time, status,
             late_minutes, overtime_minutes, undertime_minutes, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, NOW())
            "#,
        )
        .bind(event.employee_id)
        .bind(event.date)
        .bind(event.action_type.to_string())
        .bind(event.time)
        .bind(event.status.to_string())
        .bind(event.late_minutes)
        .bind(event.overtime_minutes)
        .bind(event.undertime_minutes)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id())
    }
}
