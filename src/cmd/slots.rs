use anyhow::Result;
use attendance_planner::data::SemesterConfig;

pub fn run(cohort: Option<&str>, credits: Option<&str>) -> Result<()> {
    let semester = SemesterConfig::load_and_parse()?;
    write_slots(&semester, cohort, credits, &mut std::io::stdout())
}

/// Lists slot combinations and the weekdays they meet on, optionally narrowed
/// to one cohort and credit tier.
pub(crate) fn write_slots<W: std::io::Write>(
    semester: &SemesterConfig,
    cohort: Option<&str>,
    credits: Option<&str>,
    out: &mut W,
) -> Result<()> {
    let cohorts: Vec<&str> = match cohort {
        Some(key) => {
            semester.cohort(key)?;
            vec![key]
        }
        None => semester.cohorts.keys().map(String::as_str).collect(),
    };

    let mut total = 0usize;
    for key in cohorts {
        let config = semester.cohort(key)?;
        let title = if config.label.is_empty() { key } else { config.label.as_str() };
        writeln!(out, "{title}")?;
        let tiers: Vec<&str> = match credits {
            Some(tier) => vec![tier],
            None => config.credit_tiers().collect(),
        };
        for tier in tiers {
            writeln!(out, "  {tier}")?;
            for slot in config.course_slots(key, tier)? {
                writeln!(out, "    {:<16} {}", slot.identifier, slot.meeting_days)?;
                total += 1;
            }
        }
    }
    writeln!(out, "---")?;
    writeln!(out, "Total: {total} slot(s)")?;
    Ok(())
}
