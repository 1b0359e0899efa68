use crate::data::date::{parse_date, CalendarDate};
use crate::error::{PlannerError, PlannerResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Holiday,
    Exam,
    Academic,
    Other,
}

impl EventCategory {
    /// Holidays and exam days never hold regular classes.
    pub fn cancels_classes(self) -> bool {
        matches!(self, EventCategory::Holiday | EventCategory::Exam)
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventCategory::Holiday => "holiday",
            EventCategory::Exam => "exam",
            EventCategory::Academic => "academic",
            EventCategory::Other => "other",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventSpan {
    Single(CalendarDate),
    /// Inclusive on both ends.
    Range(CalendarDate, CalendarDate),
}

impl EventSpan {
    pub fn start(&self) -> CalendarDate {
        match *self {
            EventSpan::Single(d) => d,
            EventSpan::Range(s, _) => s,
        }
    }

    pub fn end(&self) -> CalendarDate {
        match *self {
            EventSpan::Single(d) => d,
            EventSpan::Range(_, e) => e,
        }
    }

    /// Every day covered, in ascending order.
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> {
        self.start().iter_days().take_while({
            let end = self.end();
            move |d| *d <= end
        })
    }
}

/// One entry of the academic calendar as written in `semester.yaml`.
///
/// Dates stay as the authored strings; [`CalendarEvent::span`] parses them and
/// fails on anything malformed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CalendarEvent {
    pub name: String,
    #[serde(rename = "type")]
    pub category: EventCategory,
    #[serde(rename = "date", default, skip_serializing_if = "Option::is_none")]
    pub date_raw: Option<String>,
    #[serde(rename = "start_date", default, skip_serializing_if = "Option::is_none")]
    pub start_date_raw: Option<String>,
    #[serde(rename = "end_date", default, skip_serializing_if = "Option::is_none")]
    pub end_date_raw: Option<String>,
}

impl CalendarEvent {
    pub fn single(name: &str, category: EventCategory, date: &str) -> Self {
        CalendarEvent {
            name: name.to_string(),
            category,
            date_raw: Some(date.to_string()),
            start_date_raw: None,
            end_date_raw: None,
        }
    }

    pub fn range(name: &str, category: EventCategory, start: &str, end: &str) -> Self {
        CalendarEvent {
            name: name.to_string(),
            category,
            date_raw: None,
            start_date_raw: Some(start.to_string()),
            end_date_raw: Some(end.to_string()),
        }
    }

    /// A single `date` wins over a range when both are present.
    pub fn span(&self) -> PlannerResult<EventSpan> {
        if let Some(date) = &self.date_raw {
            let field = format!("date of '{}'", self.name);
            return Ok(EventSpan::Single(parse_date(&field, date)?));
        }
        match (&self.start_date_raw, &self.end_date_raw) {
            (Some(start_raw), Some(end_raw)) => {
                let start = parse_date(&format!("start_date of '{}'", self.name), start_raw)?;
                let end = parse_date(&format!("end_date of '{}'", self.name), end_raw)?;
                if end < start {
                    return Err(PlannerError::InvalidRange {
                        name: self.name.clone(),
                        start: start_raw.clone(),
                        end: end_raw.clone(),
                    });
                }
                Ok(EventSpan::Range(start, end))
            }
            _ => Err(PlannerError::MissingDate(self.name.clone())),
        }
    }
}
