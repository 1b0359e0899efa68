use anyhow::{bail, Context, Result};
use attendance_planner::calc::ProjectionResult;
use attendance_planner::data::{format_date, parse_date, CalendarDate, SemesterConfig};
use attendance_planner::state::{PlannerSession, ToggleOutcome};
use chrono::{Datelike, Local, NaiveDateTime};
use clap::Args;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Year cohort (e.g. 4th_year)
    pub cohort: String,
    /// Credit tier (e.g. 3_credits)
    pub credits: String,
    /// Slot combination (e.g. A1+TA1)
    pub slot: String,
    /// Classes held so far, from the attendance portal
    #[arg(long, allow_negative_numbers = true)]
    pub taken: i32,
    /// Classes attended out of those held
    #[arg(long, allow_negative_numbers = true)]
    pub attended: i32,
    /// Upcoming class day to plan as a skip (repeatable, YYYY-MM-DD)
    #[arg(long = "skip", value_name = "DATE")]
    pub skips: Vec<String>,
    /// Pretend it is this moment (YYYY-MM-DD or YYYY-MM-DDTHH:MM); defaults to now
    #[arg(long)]
    pub now: Option<String>,
    /// Print the projection as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &StatsArgs) -> Result<()> {
    let semester = SemesterConfig::load_and_parse()?;
    let now = resolve_now(args.now.as_deref())?;
    let result = plan(semester, args, now, &mut std::io::stderr())?;

    if args.json {
        let json = serde_json::to_string_pretty(&result).context("failed to serialize JSON")?;
        println!("{json}");
        return Ok(());
    }
    write_stats(&result, &mut std::io::stdout())
}

pub(crate) fn resolve_now(raw: Option<&str>) -> Result<NaiveDateTime> {
    let Some(raw) = raw else {
        return Ok(Local::now().naive_local());
    };
    if let Ok(at) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Ok(at);
    }
    let date = parse_date("--now", raw)?;
    Ok(date.and_time(chrono::NaiveTime::MIN))
}

/// Drives a session through the same steps the planner UI takes and returns
/// the projection. Skip dates that are not upcoming class days are reported
/// to `warnings` and ignored.
pub(crate) fn plan<W: std::io::Write>(
    semester: SemesterConfig,
    args: &StatsArgs,
    now: NaiveDateTime,
    warnings: &mut W,
) -> Result<ProjectionResult> {
    let mut session = PlannerSession::new(semester)?;
    session.set_cohort(Some(args.cohort.as_str()))?;
    session.set_credits(Some(args.credits.as_str()))?;
    session.select_slot(&args.slot)?;
    session.enter_counts(args.taken, args.attended, now);

    for raw in &args.skips {
        let date = parse_date("--skip", raw)?;
        match session.toggle_skip(date, now) {
            ToggleOutcome::Added => {}
            ToggleOutcome::Removed => {
                writeln!(warnings, "Note: {raw} was listed twice; it is no longer planned.")?;
            }
            ToggleOutcome::Rejected => {
                warn!(date = %raw, "skip date is not an upcoming class day");
                writeln!(warnings, "Ignoring {raw}: not an upcoming class day for {}.", args.slot)?;
            }
        }
    }

    match session.projection(now) {
        Some(result) => {
            info!(slot = %result.slot, valid = result.is_valid(), "projection ready");
            Ok(result)
        }
        None => bail!("No slot selected."),
    }
}

fn weekday_label(date: CalendarDate) -> String {
    date.weekday().to_string()
}

pub(crate) fn write_stats<W: std::io::Write>(result: &ProjectionResult, out: &mut W) -> Result<()> {
    let stats = &result.stats;

    writeln!(out, "Attendance Plan for {}", result.slot)?;
    writeln!(
        out,
        "Range: [{} - {}]",
        format_date(result.first_day),
        format_date(result.last_day)
    )?;
    writeln!(out, "---")?;

    if !stats.is_valid {
        writeln!(out, "Error: attended classes cannot exceed classes taken, and neither can be negative.")?;
        return Ok(());
    }

    let verdict = if stats.meets_threshold {
        format!("Safe: stays at or above {}%", stats.min_attendance_pct)
    } else {
        format!("Warning: drops below the required {}%", stats.min_attendance_pct)
    };

    writeln!(
        out,
        "{:<26} ({} / {})  = {:.2}%",
        "Current %:", stats.classes_attended, stats.classes_taken, stats.current_attendance_pct
    )?;
    writeln!(
        out,
        "{:<26} {}  (through {})",
        "Remaining Classes:",
        stats.remaining_class_count,
        format_date(result.last_day)
    )?;
    writeln!(
        out,
        "{:<26} {}  (to stay >= {}%)",
        "Skips You Can Afford:", stats.allowed_future_skips, stats.min_attendance_pct
    )?;
    writeln!(out, "---")?;
    writeln!(out, "{:<26} {}", "Skipped So Far:", stats.skipped_so_far)?;
    writeln!(out, "{:<26} {}", "Planned Skips:", stats.planned_skip_count)?;
    writeln!(
        out,
        "{:<26} ({} / {})  = {:.2}%",
        "Projected Final %:",
        stats.projected_attended,
        stats.total_classes_over_semester,
        stats.projected_attendance_pct
    )?;
    writeln!(out, "{:<26} {}", "Verdict:", verdict)?;
    writeln!(out, "---")?;
    writeln!(out, "Remaining Class Days")?;
    for day in &result.remaining_class_days {
        let label = result
            .day_labels
            .get(day)
            .map(|name| format!("  ({name})"))
            .unwrap_or_default();
        let marker = if result.planned_skips.contains(day) {
            "  [skip]"
        } else {
            ""
        };
        writeln!(out, "  {}  {}{}{}", format_date(*day), weekday_label(*day), label, marker)?;
    }
    writeln!(out, "---")?;

    Ok(())
}
