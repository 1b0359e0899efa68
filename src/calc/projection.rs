use crate::calc::attendance::{compute_attendance, AttendanceStats};
use crate::calc::class_days::project_class_days;
use crate::calc::event_index::EventIndex;
use crate::data::date::CalendarDate;
use crate::data::slot::CourseSlot;
use crate::state::record::AttendanceRecord;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Everything the presentation layer shows for a course. Recomputed on every
/// input change and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    pub slot: String,
    pub first_day: CalendarDate,
    pub last_day: CalendarDate,
    pub remaining_class_days: Vec<CalendarDate>,
    pub planned_skips: Vec<CalendarDate>,
    /// Calendar event names falling on remaining class days (academic or
    /// other events; holidays and exams never reach this list).
    pub day_labels: BTreeMap<CalendarDate, String>,
    #[serde(flatten)]
    pub stats: AttendanceStats,
}

impl ProjectionResult {
    pub fn is_valid(&self) -> bool {
        self.stats.is_valid
    }
}

/// Projects the rest of the semester for `slot` from `first_day` through
/// `last_day` inclusive.
pub fn project(
    record: &AttendanceRecord,
    slot: &CourseSlot,
    index: &EventIndex,
    first_day: CalendarDate,
    last_day: CalendarDate,
    min_attendance_pct: f64,
) -> ProjectionResult {
    let remaining_class_days = project_class_days(slot.meeting_days, index, first_day, last_day);
    let planned_skips: Vec<CalendarDate> = remaining_class_days
        .iter()
        .copied()
        .filter(|d| record.planned_skips.contains(*d))
        .collect();
    let day_labels: BTreeMap<CalendarDate, String> = remaining_class_days
        .iter()
        .filter_map(|d| index.event_on(*d).map(|ev| (*d, ev.name.clone())))
        .collect();

    let stats = compute_attendance(
        record.classes_taken,
        record.classes_attended,
        remaining_class_days.len() as i32,
        planned_skips.len() as i32,
        min_attendance_pct,
    );
    debug!(
        slot = %slot.identifier,
        remaining = remaining_class_days.len(),
        planned = planned_skips.len(),
        valid = stats.is_valid,
        "projected attendance"
    );

    ProjectionResult {
        slot: slot.identifier.clone(),
        first_day,
        last_day,
        remaining_class_days,
        planned_skips,
        day_labels,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::event::{CalendarEvent, EventCategory};
    use crate::data::slot::MeetingDays;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn slot() -> CourseSlot {
        CourseSlot {
            identifier: "A1+TA1".to_string(),
            meeting_days: MeetingDays::from_day_numbers("A1+TA1", &[2, 5, 6]).unwrap(),
        }
    }

    fn record(taken: i32, attended: i32) -> AttendanceRecord {
        AttendanceRecord {
            classes_taken: taken,
            classes_attended: attended,
            ..AttendanceRecord::default()
        }
    }

    #[test]
    fn test_projection_counts_class_days() {
        // Tue/Fri/Sat from Mon 2025-09-01 to Sat 2025-09-13: 2, 5, 6, 9, 12, 13.
        let result = project(&record(20, 18), &slot(), &EventIndex::default(), d(2025, 9, 1), d(2025, 9, 13), 75.0);
        assert!(result.is_valid());
        assert_eq!(result.remaining_class_days.len(), 6);
        assert_eq!(result.stats.remaining_class_count, 6);
        assert_eq!(result.slot, "A1+TA1");
    }

    #[test]
    fn test_holiday_reduces_remaining_count() {
        let index = EventIndex::build(&[CalendarEvent::single(
            "Teacher's Day",
            EventCategory::Holiday,
            "2025-09-05",
        )])
        .unwrap();
        let result = project(&record(20, 18), &slot(), &index, d(2025, 9, 1), d(2025, 9, 13), 75.0);
        assert_eq!(result.stats.remaining_class_count, 5);
        assert!(!result.remaining_class_days.contains(&d(2025, 9, 5)));
    }

    #[test]
    fn test_planned_skips_outside_window_not_counted() {
        let mut rec = record(20, 18);
        let all = project_class_days(slot().meeting_days, &EventIndex::default(), d(2025, 9, 1), d(2025, 9, 13));
        rec.planned_skips.toggle(d(2025, 9, 2), &all);
        rec.planned_skips.toggle(d(2025, 9, 12), &all);
        // Planning now starts after the 2nd.
        let result = project(&rec, &slot(), &EventIndex::default(), d(2025, 9, 3), d(2025, 9, 13), 75.0);
        assert_eq!(result.planned_skips, vec![d(2025, 9, 12)]);
        assert_eq!(result.stats.planned_skip_count, 1);
    }

    #[test]
    fn test_invalid_record_flags_result() {
        let result = project(&record(5, 10), &slot(), &EventIndex::default(), d(2025, 9, 1), d(2025, 9, 13), 75.0);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_serializes_flat_json() {
        let result = project(&record(20, 15), &slot(), &EventIndex::default(), d(2025, 9, 1), d(2025, 9, 2), 75.0);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["is_valid"], true);
        assert_eq!(json["remaining_class_days"][0], "2025-09-02");
        assert_eq!(json["classes_taken"], 20);
    }

    #[test]
    fn test_class_day_events_are_labelled() {
        let index = EventIndex::build(&[
            CalendarEvent::single("Review", EventCategory::Other, "2025-09-06"),
            CalendarEvent::single("Teacher's Day", EventCategory::Holiday, "2025-09-05"),
            CalendarEvent::single("Orientation", EventCategory::Academic, "2025-09-03"),
        ])
        .unwrap();
        let result = project(&record(20, 18), &slot(), &index, d(2025, 9, 1), d(2025, 9, 13), 75.0);
        // Sat the 6th is still a class day; Fri the 5th is a holiday and Wed
        // the 3rd is not a meeting day.
        assert!(result.remaining_class_days.contains(&d(2025, 9, 6)));
        assert_eq!(result.day_labels.len(), 1);
        assert_eq!(result.day_labels[&d(2025, 9, 6)], "Review");
    }
}
