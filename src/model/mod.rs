pub mod daily;
pub mod event;
pub mod policy;
pub mod summary;

pub use daily::DailyRecord;
pub use event::{ActionType, AttendanceEvent, NewAttendanceEvent, Status};
pub use policy::TimePolicy;
pub use summary::MonthlySummary;
