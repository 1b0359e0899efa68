pub mod record;
pub mod session;
pub mod skip_set;

pub use record::AttendanceRecord;
pub use session::{PlannerSession, ResetNotice, SlotFilter};
pub use skip_set::{toggle_skip, SkipSet, ToggleOutcome};
