use crate::data::date::CalendarDate;
use crate::error::{PlannerError, PlannerResult};
use chrono::{Datelike, Weekday};
use std::collections::BTreeMap;
use std::fmt;

/// Slot code -> weekday numbers, 0 = Sunday through 6 = Saturday.
pub type SlotDayMap = BTreeMap<String, Vec<u8>>;

/// Set of weekdays a course meets on, stored as one bit per day with
/// bit 0 = Sunday.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MeetingDays(u8);

impl MeetingDays {
    pub fn empty() -> Self {
        MeetingDays(0)
    }

    /// `day` uses Sunday = 0 numbering.
    pub fn from_day_numbers(code: &str, days: &[u8]) -> PlannerResult<Self> {
        let mut set = MeetingDays::empty();
        for &day in days {
            if day > 6 {
                return Err(PlannerError::InvalidWeekday {
                    code: code.to_string(),
                    day,
                });
            }
            set.0 |= 1 << day;
        }
        Ok(set)
    }

    pub fn union(self, other: MeetingDays) -> MeetingDays {
        MeetingDays(self.0 | other.0)
    }

    pub fn contains(&self, weekday: Weekday) -> bool {
        self.0 & (1 << weekday.num_days_from_sunday()) != 0
    }

    pub fn meets_on(&self, date: CalendarDate) -> bool {
        self.contains(date.weekday())
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Ascending Sunday-first day numbers.
    pub fn day_numbers(&self) -> Vec<u8> {
        (0..7).filter(|d| self.0 & (1 << d) != 0).collect()
    }

    pub fn weekdays(&self) -> Vec<Weekday> {
        self.day_numbers()
            .into_iter()
            .map(weekday_from_sunday)
            .collect()
    }
}

fn weekday_from_sunday(n: u8) -> Weekday {
    match n {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

impl fmt::Display for MeetingDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.weekdays().iter().map(|w| w.to_string()).collect();
        f.write_str(&names.join(", "))
    }
}

/// A slot combination such as `A1+TA1` resolved to the weekdays it meets on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseSlot {
    pub identifier: String,
    pub meeting_days: MeetingDays,
}

/// Resolves a slot combination against a cohort's weekday table.
///
/// Grammar: tokens joined by `+`; a token may list `/`-separated alternatives,
/// of which only the first is looked up. Empty tokens and unknown codes are
/// errors.
pub fn parse_slot(combination: &str, slot_days: &SlotDayMap) -> PlannerResult<CourseSlot> {
    let identifier = combination.trim();
    if identifier.is_empty() {
        return Err(PlannerError::EmptySlotToken(combination.to_string()));
    }

    let mut meeting_days = MeetingDays::empty();
    for token in identifier.split('+') {
        let primary = token.split('/').next().unwrap_or_default().trim();
        if primary.is_empty() {
            return Err(PlannerError::EmptySlotToken(identifier.to_string()));
        }
        let days = slot_days
            .get(primary)
            .ok_or_else(|| PlannerError::UnknownSlotCode {
                slot: identifier.to_string(),
                code: primary.to_string(),
            })?;
        meeting_days = meeting_days.union(MeetingDays::from_day_numbers(primary, days)?);
    }

    Ok(CourseSlot {
        identifier: identifier.to_string(),
        meeting_days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn table() -> SlotDayMap {
        let mut map = SlotDayMap::new();
        map.insert("A1".to_string(), vec![2, 6]);
        map.insert("TA1".to_string(), vec![5]);
        map.insert("TAA1".to_string(), vec![4]);
        map.insert("B1".to_string(), vec![2, 3]);
        map
    }

    #[test]
    fn test_single_code() {
        let slot = parse_slot("A1", &table()).unwrap();
        assert_eq!(slot.identifier, "A1");
        assert_eq!(slot.meeting_days.day_numbers(), vec![2, 6]);
    }

    #[test]
    fn test_combination_unions_days() {
        let slot = parse_slot("A1+TA1+TAA1", &table()).unwrap();
        assert_eq!(slot.meeting_days.day_numbers(), vec![2, 4, 5, 6]);
    }

    #[test]
    fn test_overlapping_days_deduplicated() {
        let slot = parse_slot("A1+B1", &table()).unwrap();
        assert_eq!(slot.meeting_days.day_numbers(), vec![2, 3, 6]);
    }

    #[test]
    fn test_only_primary_alternative_counts() {
        // B1 would add Wednesday (3) if alternatives were resolved.
        let slot = parse_slot("A1/B1+TA1", &table()).unwrap();
        assert_eq!(slot.meeting_days.day_numbers(), vec![2, 5, 6]);
    }

    #[test]
    fn test_unknown_alternative_is_ignored() {
        assert!(parse_slot("TA1/ZZ9", &table()).is_ok());
    }

    #[test]
    fn test_unknown_code_is_error() {
        let err = parse_slot("A1+XY9", &table()).unwrap_err();
        match err {
            PlannerError::UnknownSlotCode { slot, code } => {
                assert_eq!(slot, "A1+XY9");
                assert_eq!(code, "XY9");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_tokens_are_errors() {
        assert!(matches!(parse_slot("", &table()), Err(PlannerError::EmptySlotToken(_))));
        assert!(matches!(parse_slot("A1++TA1", &table()), Err(PlannerError::EmptySlotToken(_))));
        assert!(matches!(parse_slot("/A1", &table()), Err(PlannerError::EmptySlotToken(_))));
    }

    #[test]
    fn test_out_of_range_weekday_is_error() {
        let mut map = table();
        map.insert("BAD".to_string(), vec![7]);
        assert!(matches!(
            parse_slot("BAD", &map),
            Err(PlannerError::InvalidWeekday { day: 7, .. })
        ));
    }

    #[test]
    fn test_sunday_is_zero() {
        let days = MeetingDays::from_day_numbers("X", &[0]).unwrap();
        assert!(days.contains(Weekday::Sun));
        assert!(!days.contains(Weekday::Mon));
        assert_eq!(days.weekdays(), vec![Weekday::Sun]);
    }

    #[test]
    fn test_meets_on_uses_date_weekday() {
        // 2025-08-19 is a Tuesday (2), 2025-08-20 a Wednesday (3).
        let days = parse_slot("A1", &table()).unwrap().meeting_days;
        assert!(days.meets_on(NaiveDate::from_ymd_opt(2025, 8, 19).unwrap()));
        assert!(!days.meets_on(NaiveDate::from_ymd_opt(2025, 8, 20).unwrap()));
        assert!(days.meets_on(NaiveDate::from_ymd_opt(2025, 8, 23).unwrap()));
    }

    #[test]
    fn test_display_lists_weekdays() {
        let days = MeetingDays::from_day_numbers("A1", &[2, 6]).unwrap();
        assert_eq!(days.to_string(), "Tue, Sat");
    }
}
