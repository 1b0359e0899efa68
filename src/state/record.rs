use crate::state::skip_set::SkipSet;

/// What the user has entered for the active course. Counts follow the
/// "attended" convention: `classes_attended` out of `classes_taken`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub classes_taken: i32,
    pub classes_attended: i32,
    pub planned_skips: SkipSet,
}

impl AttendanceRecord {
    pub fn reset(&mut self) {
        *self = AttendanceRecord::default();
    }

    pub fn has_counts(&self) -> bool {
        self.classes_taken > 0
    }
}
