//! Error types for configuration loading and slot resolution.

use thiserror::Error;

/// Errors raised while turning configuration into engine inputs.
///
/// Routine user input problems (attended > taken, toggling a non-class day)
/// are not errors; they surface through `AttendanceStats::is_valid` and
/// `ToggleOutcome::Rejected`.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("invalid date '{value}' for {field}: expected YYYY-MM-DD")]
    InvalidDate {
        field: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("event '{name}' ends ({end}) before it starts ({start})")]
    InvalidRange {
        name: String,
        start: String,
        end: String,
    },

    #[error("event '{0}' needs either `date` or both `start_date` and `end_date`")]
    MissingDate(String),

    #[error("slot '{0}' contains an empty token")]
    EmptySlotToken(String),

    #[error("slot '{slot}' uses unknown code '{code}'")]
    UnknownSlotCode { slot: String, code: String },

    #[error("slot code '{code}' has weekday {day}; expected 0 (Sunday) to 6 (Saturday)")]
    InvalidWeekday { code: String, day: u8 },

    #[error("minimum attendance {0} is outside 0..=100")]
    InvalidThreshold(f64),

    #[error("today cutoff hour {0} is outside 0..=23")]
    InvalidCutoffHour(u32),

    #[error("cohort '{0}' not found in configuration")]
    UnknownCohort(String),

    #[error("no cohort selected; pick a cohort before a credit tier")]
    NoCohortSelected,

    #[error("credit tier '{credits}' not found for cohort '{cohort}'")]
    UnknownCreditTier { cohort: String, credits: String },

    #[error("slot '{slot}' is not offered under {cohort} / {credits}")]
    UnknownSlot {
        cohort: String,
        credits: String,
        slot: String,
    },
}

pub type PlannerResult<T> = Result<T, PlannerError>;
