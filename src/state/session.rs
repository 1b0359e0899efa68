use crate::calc::class_days::{first_plannable_day, project_class_days};
use crate::calc::event_index::EventIndex;
use crate::calc::projection::{project, ProjectionResult};
use crate::data::date::CalendarDate;
use crate::data::event::CalendarEvent;
use crate::data::semester::SemesterConfig;
use crate::data::slot::CourseSlot;
use crate::error::{PlannerError, PlannerResult};
use crate::state::record::AttendanceRecord;
use crate::state::skip_set::ToggleOutcome;
use chrono::{Duration, NaiveDateTime};
use tracing::{debug, info};

/// How long the "planned skips were cleared" advisory stays visible.
pub const RESET_NOTICE_SECS: i64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetNotice {
    pub raised_at: NaiveDateTime,
}

impl ResetNotice {
    pub fn is_visible(&self, now: NaiveDateTime) -> bool {
        now >= self.raised_at && now - self.raised_at < Duration::seconds(RESET_NOTICE_SECS)
    }
}

/// Year-cohort and credit-tier pickers. Navigation only: changing them never
/// touches the committed slot or the entered numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotFilter {
    pub cohort: Option<String>,
    pub credits: Option<String>,
}

/// Owns everything the user has chosen or typed for one planning session.
///
/// All resets happen through the transition methods here: selecting a
/// different slot, clearing the selection, or entering fresh counts.
#[derive(Debug)]
pub struct PlannerSession {
    semester: SemesterConfig,
    index: EventIndex,
    last_day: CalendarDate,
    filter: SlotFilter,
    active: Option<CourseSlot>,
    record: AttendanceRecord,
    reset_notice: Option<ResetNotice>,
}

impl PlannerSession {
    pub fn new(semester: SemesterConfig) -> PlannerResult<Self> {
        semester.settings.validate()?;
        let last_day = semester.settings.last_instructional_day()?;
        let index = EventIndex::build(&semester.academic_calendar)?;
        Ok(PlannerSession {
            semester,
            index,
            last_day,
            filter: SlotFilter::default(),
            active: None,
            record: AttendanceRecord::default(),
            reset_notice: None,
        })
    }

    pub fn semester(&self) -> &SemesterConfig {
        &self.semester
    }

    pub fn event_index(&self) -> &EventIndex {
        &self.index
    }

    pub fn last_instructional_day(&self) -> CalendarDate {
        self.last_day
    }

    /// Swaps in a new academic calendar. The index is rebuilt only when the
    /// events differ from the ones it was built from; returns whether it was.
    pub fn replace_calendar(&mut self, events: Vec<CalendarEvent>) -> PlannerResult<bool> {
        if events == self.semester.academic_calendar {
            return Ok(false);
        }
        self.index = EventIndex::build(&events)?;
        self.semester.academic_calendar = events;
        Ok(true)
    }

    pub fn filter(&self) -> &SlotFilter {
        &self.filter
    }

    /// Picks a year-cohort. The credit tier is cleared since tiers are per
    /// cohort; the active slot and record are left alone.
    pub fn set_cohort(&mut self, cohort: Option<&str>) -> PlannerResult<()> {
        if let Some(key) = cohort {
            self.semester.cohort(key)?;
        }
        self.filter.cohort = cohort.map(str::to_string);
        self.filter.credits = None;
        Ok(())
    }

    pub fn set_credits(&mut self, credits: Option<&str>) -> PlannerResult<()> {
        if let Some(tier) = credits {
            let cohort = self
                .filter
                .cohort
                .as_deref()
                .ok_or(PlannerError::NoCohortSelected)?;
            if !self.semester.cohort(cohort)?.slots.contains_key(tier) {
                return Err(PlannerError::UnknownCreditTier {
                    cohort: cohort.to_string(),
                    credits: tier.to_string(),
                });
            }
        }
        self.filter.credits = credits.map(str::to_string);
        Ok(())
    }

    /// Slots offered under the current filters; empty until both are set.
    pub fn available_slots(&self) -> PlannerResult<Vec<CourseSlot>> {
        match (&self.filter.cohort, &self.filter.credits) {
            (Some(cohort), Some(credits)) => {
                self.semester.cohort(cohort)?.course_slots(cohort, credits)
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Commits a slot from the current filters. Counts and planned skips are
    /// cleared only when the identifier differs from the active one; returns
    /// whether that happened.
    pub fn select_slot(&mut self, identifier: &str) -> PlannerResult<bool> {
        let identifier = identifier.trim();
        let slot = self
            .available_slots()?
            .into_iter()
            .find(|s| s.identifier == identifier)
            .ok_or_else(|| PlannerError::UnknownSlot {
                cohort: self.filter.cohort.clone().unwrap_or_default(),
                credits: self.filter.credits.clone().unwrap_or_default(),
                slot: identifier.to_string(),
            })?;

        let changed = self
            .active
            .as_ref()
            .is_none_or(|current| current.identifier != slot.identifier);
        if changed {
            info!(slot = %slot.identifier, days = %slot.meeting_days, "active slot changed");
            self.record.reset();
            self.reset_notice = None;
        }
        self.active = Some(slot);
        Ok(changed)
    }

    /// "Start over": drops the active slot and everything entered for it.
    pub fn clear_selection(&mut self) {
        self.active = None;
        self.record.reset();
        self.reset_notice = None;
    }

    pub fn active_slot(&self) -> Option<&CourseSlot> {
        self.active.as_ref()
    }

    pub fn record(&self) -> &AttendanceRecord {
        &self.record
    }

    /// Records the numbers read off the attendance portal.
    ///
    /// A changed entry with classes taken is treated as a fresh statement of
    /// attendance: planned skips are cleared and a reset notice is raised.
    /// Returns whether that happened.
    pub fn enter_counts(&mut self, taken: i32, attended: i32, now: NaiveDateTime) -> bool {
        let unchanged =
            self.record.classes_taken == taken && self.record.classes_attended == attended;
        self.record.classes_taken = taken;
        self.record.classes_attended = attended;
        if unchanged || !self.record.has_counts() {
            return false;
        }
        if !self.record.planned_skips.is_empty() {
            info!(cleared = self.record.planned_skips.len(), "counts changed; planned skips cleared");
        }
        self.record.planned_skips.clear();
        self.reset_notice = Some(ResetNotice { raised_at: now });
        true
    }

    pub fn reset_notice_visible(&self, now: NaiveDateTime) -> bool {
        self.reset_notice.is_some_and(|n| n.is_visible(now))
    }

    pub fn first_plannable_day(&self, now: NaiveDateTime) -> CalendarDate {
        first_plannable_day(now, self.semester.settings.today_cutoff_hour)
    }

    /// Upcoming class days of the active slot; empty with no slot selected.
    pub fn class_days(&self, now: NaiveDateTime) -> Vec<CalendarDate> {
        match &self.active {
            Some(slot) => project_class_days(
                slot.meeting_days,
                &self.index,
                self.first_plannable_day(now),
                self.last_day,
            ),
            None => Vec::new(),
        }
    }

    pub fn toggle_skip(&mut self, date: CalendarDate, now: NaiveDateTime) -> ToggleOutcome {
        let class_days = self.class_days(now);
        let outcome = self.record.planned_skips.toggle(date, &class_days);
        if outcome == ToggleOutcome::Rejected {
            debug!(date = %date, "ignored skip toggle on a non-class day");
        }
        outcome
    }

    pub fn clear_skips(&mut self) {
        self.record.planned_skips.clear();
    }

    /// Current projection for the active slot, or `None` with no slot.
    pub fn projection(&self, now: NaiveDateTime) -> Option<ProjectionResult> {
        let slot = self.active.as_ref()?;
        Some(project(
            &self.record,
            slot,
            &self.index,
            self.first_plannable_day(now),
            self.last_day,
            self.semester.settings.min_attendance,
        ))
    }
}
