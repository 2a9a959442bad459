pub mod sql;

#[cfg(test)]
pub mod mem;

use chrono::NaiveDate;
use thiserror::Error;

use crate::model::{ActionType, AttendanceEvent, NewAttendanceEvent, Status, TimePolicy};

pub use sql::SqlStore;

/// Storage-layer failure. No-data is never an error; callers get empty
/// vectors / `None` for that.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Read/write access to attendance rows and the active time policy.
///
/// Injected into every core operation; the core itself holds no
/// connection state. All reads return rows newest-first. Handlers are
/// generic over this trait, so tests run against an in-memory store.
#[allow(async_fn_in_trait)]
pub trait AttendanceStore {
    /// Punches for one employee-day and action, ordered by created_at desc.
    async fn find_events_by_employee_date_action(
        &self,
        employee_id: u64,
        date: NaiveDate,
        action: ActionType,
    ) -> Result<Vec<AttendanceEvent>, StoreError>;

    /// A month of punches, optionally narrowed to one action and/or one
    /// status, ordered by (date desc, created_at desc).
    async fn find_events_by_employee_month(
        &self,
        employee_id: u64,
        month: u32,
        year: i32,
        action: Option<ActionType>,
        status: Option<Status>,
    ) -> Result<Vec<AttendanceEvent>, StoreError>;

    /// The most recently created policy, or `None` when unconfigured.
    async fn find_active_policy(&self) -> Result<Option<TimePolicy>, StoreError>;

    /// Appends a punch row; returns the new event id.
    async fn insert_event(&self, event: NewAttendanceEvent) -> Result<u64, StoreError>;
}
