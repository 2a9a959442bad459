pub mod classifier;
pub mod daily;
pub mod history;
pub mod monthly;
pub mod punch;

pub use daily::daily_record;
pub use history::attendance_history;
pub use monthly::monthly_summary;
pub use punch::{PunchError, record_punch};
