use anyhow::Result;
use attendance_planner::data::{format_date, EventSpan, SemesterConfig};

pub fn run() -> Result<()> {
    let semester = SemesterConfig::load_and_parse()?;
    write_calendar(&semester, &mut std::io::stdout())
}

pub(crate) fn write_calendar<W: std::io::Write>(semester: &SemesterConfig, out: &mut W) -> Result<()> {
    writeln!(out, "Academic Calendar")?;
    writeln!(out, "---")?;
    writeln!(out, "  {:<25} {:<10} {}", "Date", "Type", "Name")?;
    for event in &semester.academic_calendar {
        let when = match event.span()? {
            EventSpan::Single(date) => format_date(date),
            EventSpan::Range(start, end) => format!("{} - {}", format_date(start), format_date(end)),
        };
        writeln!(out, "  {:<25} {:<10} {}", when, event.category.to_string(), event.name)?;
    }
    writeln!(out, "---")?;
    writeln!(
        out,
        "Last instructional day: {}",
        semester.settings.last_instructional_day_raw
    )?;
    writeln!(out, "Minimum attendance: {}%", semester.settings.min_attendance)?;
    writeln!(out, "Total: {} event(s)", semester.academic_calendar.len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::init::default_semester;
    use attendance_planner::data::{CalendarEvent, EventCategory};

    #[test]
    fn test_write_calendar_empty() {
        let semester = SemesterConfig::default();
        let mut buf = Vec::new();
        write_calendar(&semester, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Total: 0 event(s)"));
    }

    #[test]
    fn test_write_calendar_single_and_range() {
        let mut semester = SemesterConfig::default();
        semester.academic_calendar = vec![
            CalendarEvent::single("Independence Day", EventCategory::Holiday, "2025-08-15"),
            CalendarEvent::range("CAT-1 Exams", EventCategory::Exam, "2025-08-18", "2025-08-25"),
        ];
        let mut buf = Vec::new();
        write_calendar(&semester, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("2025-08-15"));
        assert!(out.contains("2025-08-18 - 2025-08-25"));
        assert!(out.contains("holiday"));
        assert!(out.contains("CAT-1 Exams"));
        assert!(out.contains("Total: 2 event(s)"));
    }

    #[test]
    fn test_write_calendar_default_semester() {
        let mut buf = Vec::new();
        write_calendar(&default_semester(), &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Last instructional day: 2025-11-19"));
        assert!(out.contains("Minimum attendance: 75%"));
        assert!(out.contains("Total: 12 event(s)"));
    }

    #[test]
    fn test_write_calendar_bad_date_is_error() {
        let mut semester = SemesterConfig::default();
        semester.academic_calendar =
            vec![CalendarEvent::single("Broken", EventCategory::Holiday, "2025-02-30")];
        let mut buf = Vec::new();
        assert!(write_calendar(&semester, &mut buf).is_err());
    }
}
