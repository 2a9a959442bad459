use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Company-wide time policy. Only the most recently created row (highest
/// `policy_id`) is active; admin tooling writes new rows, this service
/// only reads them.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimePolicy {
    pub policy_id: u64,

    #[schema(example = 8.0)]
    pub required_hours: f64,

    #[schema(example = 15)]
    pub grace_period_minutes: u32,

    #[schema(value_type = String, example = "08:00:00")]
    pub official_time_in_start: NaiveTime,

    #[schema(value_type = String, example = "17:00:00")]
    pub official_time_out: NaiveTime,
}

impl TimePolicy {
    pub fn required_minutes(&self) -> i64 {
        (self.required_hours * 60.0).round() as i64
    }
}
