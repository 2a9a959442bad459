use serde::Serialize;
use utoipa::ToSchema;

/// Monthly attendance rollup, recomputed in full on every request.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MonthlySummary {
    /// Distinct dates with at least one time-in punch.
    #[serde(rename = "totalDaysPresent")]
    pub total_days_present: u32,

    /// Summed hours over complete days, formatted to two decimals only
    /// here at the output edge.
    #[serde(rename = "totalHours")]
    #[schema(example = "168.50")]
    pub total_hours: String,

    /// Time-in punches with late_minutes > 0 in the month.
    #[serde(rename = "totalLate")]
    pub total_late: u32,

    /// Summed overtime minutes over time-out punches in the month.
    #[serde(rename = "totalOvertime")]
    pub total_overtime: u32,
}

impl MonthlySummary {
    pub fn empty() -> Self {
        Self {
            total_days_present: 0,
            total_hours: "0.00".to_string(),
            total_late: 0,
            total_overtime: 0,
        }
    }
}
