use crate::data::date::CalendarDate;
use crate::data::event::CalendarEvent;
use crate::error::PlannerResult;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Day -> academic event lookup built from the calendar.
#[derive(Clone, Debug, Default)]
pub struct EventIndex {
    by_date: HashMap<CalendarDate, CalendarEvent>,
}

impl EventIndex {
    /// Expands every event onto the days it covers, ranges inclusive on both
    /// ends. When two events claim the same day the later one in `events`
    /// wins; the calendar is hand-authored and declares no overlaps.
    ///
    /// Any malformed date aborts the build.
    pub fn build(events: &[CalendarEvent]) -> PlannerResult<Self> {
        let mut by_date = HashMap::new();
        for event in events {
            let span = event.span()?;
            for day in span.days() {
                if let Some(previous) = by_date.insert(day, event.clone()) {
                    warn!(
                        date = %day,
                        replaced = %previous.name,
                        by = %event.name,
                        "calendar events overlap; keeping the later one"
                    );
                }
            }
        }
        debug!(events = events.len(), days = by_date.len(), "built event index");
        Ok(EventIndex { by_date })
    }

    pub fn event_on(&self, date: CalendarDate) -> Option<&CalendarEvent> {
        self.by_date.get(&date)
    }

    /// True when the day is a holiday or exam day.
    pub fn is_excluded(&self, date: CalendarDate) -> bool {
        self.event_on(date)
            .is_some_and(|ev| ev.category.cancels_classes())
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
