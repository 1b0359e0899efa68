use serde::Serialize;

/// Attendance figures for one course. Read nothing but `is_valid` when it is
/// false; the other fields are zeroed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttendanceStats {
    pub is_valid: bool,
    pub classes_taken: i32,
    pub classes_attended: i32,
    pub skipped_so_far: i32,
    pub current_attendance_pct: f64,
    pub remaining_class_count: i32,
    pub planned_skip_count: i32,
    pub total_classes_over_semester: i32,
    pub total_allowed_skips: i32,
    /// Negative when the student is already past the skip budget.
    pub allowed_future_skips: i32,
    pub projected_attended: i32,
    /// Not clamped; may exceed 100 or drop below 0 only through bad input.
    pub projected_attendance_pct: f64,
    pub min_attendance_pct: f64,
    pub current_meets_threshold: bool,
    pub meets_threshold: bool,
}

impl AttendanceStats {
    pub fn invalid() -> Self {
        AttendanceStats::default()
    }
}

/// Computes current and projected attendance.
///
/// `attended` is the number of classes actually attended out of `taken`.
/// `planned_skips` is how many of the `remaining` future class days the user
/// intends to miss. Invalid input (negative counts, attended > taken, a
/// semester total past `i32::MAX`) yields `is_valid == false` rather than an
/// error.
pub fn compute_attendance(
    taken: i32,
    attended: i32,
    remaining: i32,
    planned_skips: i32,
    min_attendance_pct: f64,
) -> AttendanceStats {
    if taken < 0 || attended < 0 || attended > taken || remaining < 0 || planned_skips < 0 {
        return AttendanceStats::invalid();
    }
    // Never plan more skips than there are classes left.
    let planned_skips = planned_skips.min(remaining);

    let skipped_so_far = taken - attended;
    // Counts are bounded by the semester total; a total that does not fit is
    // nonsense input.
    let Some(total_classes_over_semester) = taken.checked_add(remaining) else {
        return AttendanceStats::invalid();
    };
    let current_attendance_pct = if taken > 0 {
        100.0 * attended as f64 / taken as f64
    } else {
        0.0
    };

    if total_classes_over_semester == 0 {
        return AttendanceStats {
            is_valid: true,
            min_attendance_pct,
            ..AttendanceStats::default()
        };
    }

    // floor(total * (100 - min) / 100); dividing last keeps whole-percent
    // thresholds exact.
    let total_allowed_skips =
        (total_classes_over_semester as f64 * (100.0 - min_attendance_pct) / 100.0).floor() as i32;
    let allowed_future_skips = total_allowed_skips - skipped_so_far - planned_skips;
    let projected_attended = attended + (remaining - planned_skips);
    let projected_attendance_pct =
        100.0 * projected_attended as f64 / total_classes_over_semester as f64;

    AttendanceStats {
        is_valid: true,
        classes_taken: taken,
        classes_attended: attended,
        skipped_so_far,
        current_attendance_pct,
        remaining_class_count: remaining,
        planned_skip_count: planned_skips,
        total_classes_over_semester,
        total_allowed_skips,
        allowed_future_skips,
        projected_attended,
        projected_attendance_pct,
        min_attendance_pct,
        current_meets_threshold: current_attendance_pct >= min_attendance_pct,
        meets_threshold: projected_attendance_pct >= min_attendance_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_current_pct_formula() {
        for taken in 0..=40 {
            for attended in 0..=taken {
                let stats = compute_attendance(taken, attended, 5, 0, 75.0);
                assert!(stats.is_valid);
                let expected = if taken > 0 {
                    attended as f64 / taken as f64 * 100.0
                } else {
                    0.0
                };
                assert!(close(stats.current_attendance_pct, expected));
            }
        }
    }

    #[test]
    fn test_scenario_within_budget() {
        let stats = compute_attendance(20, 15, 10, 0, 75.0);
        assert!(stats.is_valid);
        assert_eq!(stats.skipped_so_far, 5);
        assert_eq!(stats.total_classes_over_semester, 30);
        assert_eq!(stats.total_allowed_skips, 7);
        assert_eq!(stats.allowed_future_skips, 2);
        assert_eq!(stats.projected_attended, 25);
        assert!(close(stats.projected_attendance_pct, 250.0 / 3.0));
        assert!(close(stats.current_attendance_pct, 75.0));
        assert!(stats.meets_threshold);
        assert!(stats.current_meets_threshold);
    }

    #[test]
    fn test_scenario_over_budget() {
        let stats = compute_attendance(20, 15, 10, 3, 75.0);
        assert!(stats.is_valid);
        assert_eq!(stats.allowed_future_skips, -1);
        assert_eq!(stats.projected_attended, 22);
        assert!(close(stats.projected_attendance_pct, 220.0 / 3.0));
        assert!(!stats.meets_threshold);
    }

    #[test]
    fn test_all_zero_input_is_valid_and_zeroed() {
        let stats = compute_attendance(0, 0, 0, 0, 75.0);
        assert!(stats.is_valid);
        assert_eq!(stats.current_attendance_pct, 0.0);
        assert_eq!(stats.remaining_class_count, 0);
        assert_eq!(stats.allowed_future_skips, 0);
        assert_eq!(stats.projected_attendance_pct, 0.0);
    }

    #[test]
    fn test_attended_exceeds_taken_is_invalid() {
        let stats = compute_attendance(5, 10, 10, 0, 75.0);
        assert!(!stats.is_valid);
        assert_eq!(stats, AttendanceStats::invalid());
    }

    #[test]
    fn test_negative_counts_are_invalid() {
        assert!(!compute_attendance(-1, 0, 10, 0, 75.0).is_valid);
        assert!(!compute_attendance(10, -2, 10, 0, 75.0).is_valid);
        assert!(!compute_attendance(10, 5, -1, 0, 75.0).is_valid);
        assert!(!compute_attendance(10, 5, 10, -1, 75.0).is_valid);
    }

    #[test]
    fn test_each_planned_skip_costs_exactly_one() {
        let mut previous = compute_attendance(30, 27, 20, 0, 75.0).allowed_future_skips;
        for planned in 1..=20 {
            let now = compute_attendance(30, 27, 20, planned, 75.0).allowed_future_skips;
            assert_eq!(now, previous - 1);
            previous = now;
        }
    }

    #[test]
    fn test_allowed_skips_floor_never_rounds_up() {
        // 31 * 0.25 = 7.75 -> 7
        assert_eq!(compute_attendance(21, 21, 10, 0, 75.0).total_allowed_skips, 7);
    }

    #[test]
    fn test_non_quarter_threshold_is_exact() {
        // 10 classes at 80% allows exactly 2 misses.
        assert_eq!(compute_attendance(0, 0, 10, 0, 80.0).total_allowed_skips, 2);
    }

    #[test]
    fn test_no_classes_taken_yet() {
        let stats = compute_attendance(0, 0, 40, 0, 75.0);
        assert!(stats.is_valid);
        assert_eq!(stats.current_attendance_pct, 0.0);
        assert!(!stats.current_meets_threshold);
        assert_eq!(stats.allowed_future_skips, 10);
        assert!(close(stats.projected_attendance_pct, 100.0));
    }

    #[test]
    fn test_semester_over_uses_taken_only() {
        let stats = compute_attendance(40, 28, 0, 0, 75.0);
        assert_eq!(stats.total_allowed_skips, 10);
        assert_eq!(stats.allowed_future_skips, -2);
        assert!(close(stats.projected_attendance_pct, 70.0));
        assert!(!stats.meets_threshold);
    }

    #[test]
    fn test_planned_skips_capped_at_remaining() {
        let stats = compute_attendance(10, 10, 2, 5, 75.0);
        assert_eq!(stats.planned_skip_count, 2);
        assert_eq!(stats.projected_attended, 10);
    }

    #[test]
    fn test_exactly_at_threshold_meets_it() {
        let stats = compute_attendance(4, 3, 0, 0, 75.0);
        assert!(close(stats.projected_attendance_pct, 75.0));
        assert!(stats.meets_threshold);
    }

    #[test]
    fn test_total_past_i32_max_is_invalid() {
        let stats = compute_attendance(i32::MAX, i32::MAX, 10, 0, 75.0);
        assert!(!stats.is_valid);
        assert_eq!(stats, AttendanceStats::invalid());
    }

    #[test]
    fn test_total_at_i32_max_is_valid() {
        let stats = compute_attendance(i32::MAX, i32::MAX, 0, 0, 75.0);
        assert!(stats.is_valid);
        assert_eq!(stats.total_classes_over_semester, i32::MAX);
        assert_eq!(stats.projected_attended, i32::MAX);
        assert!(stats.meets_threshold);
    }
}
