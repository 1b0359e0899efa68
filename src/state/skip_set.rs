use crate::data::date::CalendarDate;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The date is not an upcoming class day; nothing changed.
    Rejected,
}

/// Future class days the user plans to miss.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkipSet {
    dates: BTreeSet<CalendarDate>,
}

impl SkipSet {
    /// Flips membership of `date`. Adding requires `date` to be one of
    /// `class_days`; removing is always allowed.
    pub fn toggle(&mut self, date: CalendarDate, class_days: &[CalendarDate]) -> ToggleOutcome {
        if self.dates.remove(&date) {
            return ToggleOutcome::Removed;
        }
        if class_days.binary_search(&date).is_err() {
            return ToggleOutcome::Rejected;
        }
        self.dates.insert(date);
        ToggleOutcome::Added
    }

    pub fn clear(&mut self) {
        self.dates.clear();
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.dates.iter().copied()
    }
}

/// Unchecked membership flip returning a new set.
pub fn toggle_skip(set: &SkipSet, date: CalendarDate) -> SkipSet {
    let mut next = set.clone();
    if !next.dates.remove(&date) {
        next.dates.insert(date);
    }
    next
}
