//! Attendance planning engine: which class days are left in the semester, how
//! many of them a student can still miss, and where a planned set of misses
//! leaves their final attendance.

pub mod calc;
pub mod data;
pub mod error;
pub mod state;

pub use calc::{compute_attendance, project, project_class_days, AttendanceStats, EventIndex, ProjectionResult};
pub use data::{CalendarDate, CalendarEvent, CourseSlot, EventCategory, SemesterConfig};
pub use error::{PlannerError, PlannerResult};
pub use state::{toggle_skip, PlannerSession, SkipSet, ToggleOutcome};
