pub mod attendance;
pub mod class_days;
pub mod event_index;
pub mod projection;

pub use attendance::{compute_attendance, AttendanceStats};
pub use class_days::{first_plannable_day, project_class_days};
pub use event_index::EventIndex;
pub use projection::{project, ProjectionResult};
