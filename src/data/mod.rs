pub mod date;
pub mod event;
pub mod persistence;
pub mod semester;
pub mod slot;

pub use date::{format_date, parse_date, CalendarDate};
pub use event::{CalendarEvent, EventCategory, EventSpan};
pub use persistence::Persistable;
pub use semester::{CohortConfig, PlannerSettings, SemesterConfig};
pub use slot::{parse_slot, CourseSlot, MeetingDays, SlotDayMap};
