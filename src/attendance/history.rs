//! Attendance history: the raw, unmerged event rows for a month.
//!
//! Unlike the daily aggregator this exposes both punch rows per day;
//! grouping them back into daily shape is the client's concern.

use crate::model::{AttendanceEvent, Status};
use crate::store::{AttendanceStore, StoreError};

/// Raw events for `(employee_id, month, year)`, newest first
/// (date desc, then created_at desc), optionally narrowed to one
/// status. The filter matches each event's own stored status, not the
/// derived daily status.
pub async fn attendance_history<S: AttendanceStore>(
    store: &S,
    employee_id: u64,
    month: u32,
    year: i32,
    status: Option<Status>,
) -> Result<Vec<AttendanceEvent>, StoreError> {
    store
        .find_events_by_employee_month(employee_id, month, year, None, status)
        .await
}
