use crate::calc::event_index::EventIndex;
use crate::data::date::CalendarDate;
use crate::data::slot::MeetingDays;
use chrono::{NaiveDateTime, Timelike};

/// Returns every day in [start, end] inclusive on which the course meets and
/// that is not a holiday or exam day, ascending. Empty when start > end.
pub fn project_class_days(
    meeting_days: MeetingDays,
    index: &EventIndex,
    start: CalendarDate,
    end: CalendarDate,
) -> Vec<CalendarDate> {
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        if meeting_days.meets_on(current) && !index.is_excluded(current) {
            days.push(current);
        }
        current = match current.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    days
}

/// First day still open for planning given the wall clock.
///
/// With no cutoff, today is always plannable. With a cutoff hour, today's
/// classes are treated as held from that hour on and planning starts tomorrow.
pub fn first_plannable_day(now: NaiveDateTime, cutoff_hour: Option<u32>) -> CalendarDate {
    let today = now.date();
    match cutoff_hour {
        Some(hour) if now.hour() >= hour => today.succ_opt().unwrap_or(today),
        _ => today,
    }
}
