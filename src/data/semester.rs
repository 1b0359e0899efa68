use crate::calc::event_index::EventIndex;
use crate::data::date::{parse_date, CalendarDate};
use crate::data::event::CalendarEvent;
use crate::data::persistence::Persistable;
use crate::data::slot::{parse_slot, CourseSlot, SlotDayMap};
use crate::error::{PlannerError, PlannerResult};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

pub const DEFAULT_MIN_ATTENDANCE: f64 = 75.0;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlannerSettings {
    pub min_attendance: f64,
    #[serde(rename = "last_instructional_day")]
    pub last_instructional_day_raw: String,
    /// Hour (0..=23, local time) from which today's classes count as held.
    /// `None` keeps today plannable all day.
    #[serde(default)]
    pub today_cutoff_hour: Option<u32>,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        PlannerSettings {
            min_attendance: DEFAULT_MIN_ATTENDANCE,
            last_instructional_day_raw: String::new(),
            today_cutoff_hour: None,
        }
    }
}

impl PlannerSettings {
    pub fn last_instructional_day(&self) -> PlannerResult<CalendarDate> {
        parse_date("last_instructional_day", &self.last_instructional_day_raw)
    }

    pub fn validate(&self) -> PlannerResult<()> {
        if !(0.0..=100.0).contains(&self.min_attendance) {
            return Err(PlannerError::InvalidThreshold(self.min_attendance));
        }
        if let Some(hour) = self.today_cutoff_hour {
            if hour > 23 {
                return Err(PlannerError::InvalidCutoffHour(hour));
            }
        }
        self.last_instructional_day()?;
        Ok(())
    }
}

/// One year-cohort: its slot weekday table and the slot combinations offered
/// per credit tier.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CohortConfig {
    #[serde(default)]
    pub label: String,
    pub slot_days: SlotDayMap,
    pub slots: BTreeMap<String, Vec<String>>,
}

impl CohortConfig {
    pub fn credit_tiers(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// All slot combinations of a credit tier, resolved to weekdays.
    pub fn course_slots(&self, cohort: &str, credits: &str) -> PlannerResult<Vec<CourseSlot>> {
        let combos = self
            .slots
            .get(credits)
            .ok_or_else(|| PlannerError::UnknownCreditTier {
                cohort: cohort.to_string(),
                credits: credits.to_string(),
            })?;
        combos
            .iter()
            .map(|combo| parse_slot(combo, &self.slot_days))
            .collect()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SemesterConfig {
    #[serde(default)]
    pub settings: PlannerSettings,
    #[serde(default)]
    pub academic_calendar: Vec<CalendarEvent>,
    #[serde(default)]
    pub cohorts: BTreeMap<String, CohortConfig>,
}

impl Persistable for SemesterConfig {
    fn filename() -> &'static str {
        "semester.yaml"
    }
}

impl SemesterConfig {
    pub fn load_and_parse() -> Result<Self> {
        let data = Self::load()?;
        data.validate()?;
        Ok(data)
    }

    /// Checks every date, range, threshold and slot combination so a bad
    /// hand edit fails here instead of silently dropping class days later.
    pub fn validate(&self) -> PlannerResult<()> {
        self.settings.validate()?;
        EventIndex::build(&self.academic_calendar)?;
        for (key, cohort) in &self.cohorts {
            for credits in cohort.credit_tiers() {
                let slots = cohort.course_slots(key, credits)?;
                debug!(cohort = %key, credits, slots = slots.len(), "validated slot list");
            }
        }
        Ok(())
    }

    pub fn cohort(&self, key: &str) -> PlannerResult<&CohortConfig> {
        self.cohorts
            .get(key)
            .ok_or_else(|| PlannerError::UnknownCohort(key.to_string()))
    }
}
