use std::str::FromStr;

use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::attendance::{self, PunchError};
use crate::model::{ActionType, Status};
use crate::store::AttendanceStore;

/// Query parameters for the today view.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TodayQuery {
    #[serde(rename = "employeeId")]
    #[param(example = 1001)]
    pub employee_id: Option<u64>,
}

/// Query parameters shared by the summary and history views.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MonthQuery {
    #[serde(rename = "employeeId")]
    #[param(example = 1001)]
    pub employee_id: Option<u64>,

    #[param(example = 3)]
    pub month: Option<u32>,

    #[param(example = 2025)]
    pub year: Option<i32>,

    /// Optional status filter; `all` (or absent) means no filter.
    #[param(example = "late")]
    pub status: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct PunchRequest {
    #[serde(rename = "employeeId")]
    #[schema(example = 1001)]
    pub employee_id: u64,
}

fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "success": false,
        "message": message
    }))
}

/// Today's daily record for one employee
#[utoipa::path(
    get,
    path = "/api/v1/attendance/today",
    params(TodayQuery),
    responses(
        (status = 200, description = "Daily record, or data: null when no time-in exists today"),
        (status = 400, description = "Employee ID is required"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn today_attendance<S: AttendanceStore + 'static>(
    store: web::Data<S>,
    query: web::Query<TodayQuery>,
) -> actix_web::Result<impl Responder> {
    let Some(employee_id) = query.employee_id else {
        return Ok(bad_request("Employee ID is required"));
    };

    let today = chrono::Local::now().date_naive();

    let record = attendance::daily_record(store.get_ref(), employee_id, today)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, employee_id, "Failed to fetch today's attendance");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": record
    })))
}

/// Monthly attendance summary
#[utoipa::path(
    get,
    path = "/api/v1/attendance/summary",
    params(MonthQuery),
    responses(
        (status = 200, description = "Summary totals; all zeros for an empty month"),
        (status = 400, description = "Missing required parameter"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn monthly_summary<S: AttendanceStore + 'static>(
    store: web::Data<S>,
    query: web::Query<MonthQuery>,
) -> actix_web::Result<impl Responder> {
    let (Some(employee_id), Some(month), Some(year)) =
        (query.employee_id, query.month, query.year)
    else {
        return Ok(bad_request("Employee ID, month, and year are required"));
    };
    if !(1..=12).contains(&month) {
        return Ok(bad_request("Month must be between 1 and 12"));
    }

    let summary = attendance::monthly_summary(store.get_ref(), employee_id, month, year)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, employee_id, month, year, "Failed to compute monthly summary");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": summary
    })))
}

/// Raw attendance history for a month, newest first
#[utoipa::path(
    get,
    path = "/api/v1/attendance/history",
    params(MonthQuery),
    responses(
        (status = 200, description = "Unmerged punch events, optionally filtered by status"),
        (status = 400, description = "Missing required parameter or invalid status"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn attendance_history<S: AttendanceStore + 'static>(
    store: web::Data<S>,
    query: web::Query<MonthQuery>,
) -> actix_web::Result<impl Responder> {
    let (Some(employee_id), Some(month), Some(year)) =
        (query.employee_id, query.month, query.year)
    else {
        return Ok(bad_request("Employee ID, month, and year are required"));
    };
    if !(1..=12).contains(&month) {
        return Ok(bad_request("Month must be between 1 and 12"));
    }

    let status = match query.status.as_deref() {
        None | Some("all") => None,
        Some(raw) => match Status::from_str(raw) {
            Ok(status) => Some(status),
            Err(_) => return Ok(bad_request("Invalid status filter")),
        },
    };

    let events = attendance::attendance_history(store.get_ref(), employee_id, month, year, status)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, employee_id, month, year, "Failed to fetch attendance history");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": events
    })))
}

async fn punch<S: AttendanceStore + 'static>(
    store: web::Data<S>,
    payload: web::Json<PunchRequest>,
    action: ActionType,
) -> actix_web::Result<HttpResponse> {
    let employee_id = payload.employee_id;
    let now = chrono::Local::now();

    let result = attendance::record_punch(
        store.get_ref(),
        employee_id,
        now.date_naive(),
        now.time(),
        action,
    )
    .await;

    match result {
        Ok(event) => Ok(HttpResponse::Created().json(serde_json::json!({
            "success": true,
            "data": event
        }))),
        Err(PunchError::MissingTimeIn) => Ok(bad_request("No time-in recorded for today")),
        Err(PunchError::NoActivePolicy) => {
            tracing::error!(employee_id, "Punch rejected: no active time policy");
            Err(actix_web::error::ErrorInternalServerError(
                "No active time policy configured",
            ))
        }
        Err(PunchError::Store(e)) => {
            tracing::error!(error = %e, employee_id, "Failed to record punch");
            Err(actix_web::error::ErrorInternalServerError(
                "Internal Server Error",
            ))
        }
    }
}

/// Record a time-in punch at the current wall-clock time
#[utoipa::path(
    post,
    path = "/api/v1/attendance/time-in",
    request_body = PunchRequest,
    responses(
        (status = 201, description = "Punch recorded with derived status"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn time_in<S: AttendanceStore + 'static>(
    store: web::Data<S>,
    payload: web::Json<PunchRequest>,
) -> actix_web::Result<impl Responder> {
    punch(store, payload, ActionType::TimeIn).await
}

/// Record a time-out punch at the current wall-clock time
#[utoipa::path(
    post,
    path = "/api/v1/attendance/time-out",
    request_body = PunchRequest,
    responses(
        (status = 201, description = "Punch recorded with derived status"),
        (status = 400, description = "No time-in recorded for today"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn time_out<S: AttendanceStore + 'static>(
    store: web::Data<S>,
    payload: web::Json<PunchRequest>,
) -> actix_web::Result<impl Responder> {
    punch(store, payload, ActionType::TimeOut).await
}
