use anyhow::Result;
use attendance_planner::data::persistence::{get_data_dir, Persistable};
use attendance_planner::data::{
    CalendarEvent, CohortConfig, EventCategory, PlannerSettings, SemesterConfig, SlotDayMap,
};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

pub fn run() -> Result<()> {
    let dir = get_data_dir()?;
    fs::create_dir_all(&dir)?;
    run_in_dir(&dir)?;
    println!(
        "Sample semester written to {}",
        dir.join(SemesterConfig::filename()).display()
    );
    Ok(())
}

/// Writes the default semester file into `dir`. Exposed for unit testing.
pub(crate) fn run_in_dir(dir: &Path) -> Result<()> {
    let semester = default_semester();
    semester.validate()?;
    semester.save_to(dir)?;
    info!(dir = %dir.display(), cohorts = semester.cohorts.len(), "wrote sample semester");
    Ok(())
}

pub(crate) fn default_semester() -> SemesterConfig {
    SemesterConfig {
        settings: PlannerSettings {
            min_attendance: 75.0,
            last_instructional_day_raw: "2025-11-19".to_string(),
            today_cutoff_hour: None,
        },
        academic_calendar: default_calendar(),
        cohorts: default_cohorts(),
    }
}

fn default_calendar() -> Vec<CalendarEvent> {
    use EventCategory::*;
    vec![
        CalendarEvent::single("Semester Starts", Academic, "2025-07-22"),
        CalendarEvent::single("Independence Day", Holiday, "2025-08-15"),
        CalendarEvent::range("CAT-1 Exams", Exam, "2025-08-18", "2025-08-25"),
        CalendarEvent::single("Ganesh Chaturthi", Holiday, "2025-08-27"),
        CalendarEvent::single("Teacher's Day", Holiday, "2025-09-05"),
        CalendarEvent::single("Gandhi Jayanti", Holiday, "2025-10-02"),
        CalendarEvent::range("CAT-2 Exams", Exam, "2025-10-06", "2025-10-13"),
        CalendarEvent::range("Diwali Break", Holiday, "2025-10-17", "2025-10-21"),
        CalendarEvent::range("Lab FAT Exams", Exam, "2025-11-08", "2025-11-14"),
        CalendarEvent::single("Review", Other, "2025-11-15"),
        CalendarEvent::single("Last Day of Instruction", Academic, "2025-11-19"),
        CalendarEvent::range("FAT Exams", Exam, "2025-11-21", "2025-12-08"),
    ]
}

fn default_slot_days() -> SlotDayMap {
    let table: &[(&str, &[u8])] = &[
        ("A1", &[2, 6]), ("A2", &[2, 4]), ("B1", &[2, 3]), ("B2", &[2, 3]),
        ("C1", &[4, 6]), ("C2", &[4, 5]), ("D1", &[2, 3]), ("D2", &[3, 6]),
        ("E1", &[3, 6]), ("E2", &[3, 6]), ("F1", &[3, 5]), ("F2", &[2, 3, 5]),
        ("G1", &[2, 6]), ("G2", &[2, 3]),
        ("SC1", &[3]), ("SC2", &[3]), ("SD1", &[6]), ("SD2", &[5]), ("SE1", &[4]), ("SE2", &[6]),
        ("TA1", &[5]), ("TA2", &[5]), ("TAA1", &[4]), ("TAA2", &[6]),
        ("TB1", &[5]), ("TB2", &[5]), ("TBB1", &[4]), ("TBB2", &[6]),
        ("TC1", &[2]), ("TC2", &[2]), ("TCC1", &[5]), ("TCC2", &[3]),
        ("TD1", &[4]), ("TD2", &[4]), ("TDD1", &[6]), ("TDD2", &[2]),
        ("TE1", &[5]), ("TE2", &[4]), ("TEE1", &[4]), ("TEE2", &[5]),
        ("TF1", &[6]), ("TF2", &[3]), ("TFF1", &[2]), ("TFF2", &[6]),
        ("TG1", &[4]), ("TG2", &[4]), ("TGG1", &[3]), ("TGG2", &[4]),
    ];
    table
        .iter()
        .map(|(code, days)| (code.to_string(), days.to_vec()))
        .collect()
}

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn default_slots() -> BTreeMap<String, Vec<String>> {
    let mut slots = BTreeMap::new();
    slots.insert(
        "4_credits".to_string(),
        strings(&[
            "A1+TA1+TAA1", "B1+TB1+TBB1", "C1+TC1+TCC1", "C1+SC1+TC1", "D1+TD1+TDD1",
            "D1+TD1+SD1", "A2+TA2+TAA2", "B2+TB2+TBB2", "C2+TC2+TCC2", "C2+SC2+TC2",
            "D2+TD2+TDD2", "D2+SD2+TD2", "E1+TE1+TEE1", "E1+SE1+TE1", "F1+TF1+TFF1",
            "F1+TF1+TBB2", "G1+TG1+TGG1", "E2+TE2+TEE2", "E2+SE2+TE2", "F2+TF2+TFF2",
            "F2+TF2+TBB1",
        ]),
    );
    slots.insert(
        "3_credits".to_string(),
        strings(&[
            "A1+TA1", "B1+TB1", "C1+TC1", "C1+TCC1", "D1+TD1", "D1+TDD1", "E1+TEE1", "E1+TE1",
            "F1+TF1", "F1+TFF1", "G1+TG1", "G1+TGG1", "A2+TA2", "B2+TB2", "C2+TC2",
            "C2+TCC2", "D2+TD2", "D2+TDD2", "E2+TE2", "E2+TEE2", "F2+TF2",
            "F2+TFF2", "G2+TG2", "G2+TGG2",
        ]),
    );
    slots.insert(
        "2_credits".to_string(),
        strings(&[
            "A1", "B1", "C1", "D1", "E1", "F1", "G1", "A2", "B2", "C2", "D2", "E2", "F2", "G2",
        ]),
    );
    slots
}

fn default_cohorts() -> BTreeMap<String, CohortConfig> {
    [
        ("2nd_year", "2nd Year (2024 Batch)"),
        ("3rd_year", "3rd Year (2023 Batch)"),
        ("4th_year", "4th Year (2022 Batch)"),
    ]
    .into_iter()
    .map(|(key, label)| {
        (
            key.to_string(),
            CohortConfig {
                label: label.to_string(),
                slot_days: default_slot_days(),
                slots: default_slots(),
            },
        )
    })
    .collect()
}
