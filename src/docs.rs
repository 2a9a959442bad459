use crate::api::attendance::PunchRequest;
use crate::model::{ActionType, AttendanceEvent, DailyRecord, MonthlySummary, Status, TimePolicy};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chronyx Attendance API",
        version = "1.0.0",
        description = r#"
## Chronyx Employee Attendance Service

Backend for QR-based employee time tracking.

### 🔹 Key Features
- **Punch Recording**
  - Time-in / time-out punches classified against the active time policy
- **Daily Attendance**
  - Today's merged record with late/overtime/undertime minutes
- **Monthly Summary**
  - Days present, total hours, late count, overtime minutes
- **Attendance History**
  - Raw punch rows per month with status filtering

### 📦 Response Format
- JSON responses wrapped in `{ "success": bool, "data": ... }`
- Times are local wall-clock values; dates are calendar days

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::attendance::today_attendance,
        crate::api::attendance::monthly_summary,
        crate::api::attendance::attendance_history,
        crate::api::attendance::time_in,
        crate::api::attendance::time_out,
    ),
    components(schemas(
        AttendanceEvent,
        DailyRecord,
        MonthlySummary,
        TimePolicy,
        Status,
        ActionType,
        PunchRequest,
    )),
    tags(
        (name = "Attendance", description = "Attendance punches, daily records, and monthly rollups")
    )
)]
pub struct ApiDoc;
