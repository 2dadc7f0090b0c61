//! Schedule quality metrics.
//!
//! Pure, order-independent functions of a feasible combination; no
//! randomness and no side effects.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | num_days | Distinct days with ≥1 slot |
//! | gap_time | Σ over days of (day span − class time) |
//! | max_consecutive | Longest merged contiguous block |
//! | total_hours | Σ of all slot durations |
//! | total_credits | Σ of course credits |
//! | earliest_start / latest_end | Extremes over all slots |
//!
//! A day's span runs from its own earliest start to its own latest end —
//! no fixed daily window — so gap time counts only idle hours between
//! that day's first and last class.

use crate::models::{Course, ScheduleCandidate, Slot};

use super::merge::{merge_day, slots_by_day, Interval};

/// Computes the metric snapshot for a feasible combination.
///
/// The combination is recorded by course code in the order given (the
/// enumerator passes catalog order). Metric values do not depend on
/// course order.
pub fn compute_metrics(combination: &[&Course]) -> ScheduleCandidate {
    let days = slots_by_day(combination);

    let mut gap_time = 0;
    let mut max_consecutive = 0;
    for slots in days.values() {
        let merged = merge_day(slots);
        // Merged blocks are disjoint and in start order, so the outer
        // bounds are the day's earliest start and latest end.
        let span = merged[merged.len() - 1].end - merged[0].start;
        let class_time: i32 = slots.iter().map(|s| s.duration()).sum();
        gap_time += span - class_time;

        let longest = merged.iter().map(Interval::duration).max().unwrap_or(0);
        max_consecutive = max_consecutive.max(longest);
    }

    let starts = combination.iter().flat_map(|c| &c.slots).map(|s| s.start);
    let ends = combination.iter().flat_map(|c| &c.slots).map(|s| s.end);
    let total_hours: i32 = combination
        .iter()
        .flat_map(|c| &c.slots)
        .map(Slot::duration)
        .sum();

    ScheduleCandidate {
        course_codes: combination.iter().map(|c| c.code.clone()).collect(),
        num_days: days.len(),
        gap_time,
        max_consecutive,
        total_hours,
        total_credits: combination.iter().map(|c| c.credits).sum(),
        earliest_start: starts.min().unwrap_or(0),
        latest_end: ends.max().unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    fn course(code: &str, credits: f64, slots: &[(Weekday, i32, i32)]) -> Course {
        let mut c = Course::new(code, "X", credits);
        for &(day, start, end) in slots {
            c = c.with_slot(Slot::new(day, start, end, "lecture"));
        }
        c
    }

    #[test]
    fn test_metrics_single_day_with_gap() {
        let a = course("A", 5.0, &[(Weekday::Monday, 9, 11)]);
        let b = course("B", 4.5, &[(Weekday::Monday, 13, 15)]);

        let m = compute_metrics(&[&a, &b]);
        assert_eq!(m.course_codes, ["A", "B"]);
        assert_eq!(m.num_days, 1);
        assert_eq!(m.gap_time, 2); // span 9..15 = 6, class time 4
        assert_eq!(m.max_consecutive, 2);
        assert_eq!(m.total_hours, 4);
        assert_eq!(m.total_credits, 9.5);
        assert_eq!(m.earliest_start, 9);
        assert_eq!(m.latest_end, 15);
    }

    #[test]
    fn test_gap_time_uses_each_days_own_span() {
        // Wednesday's single class contributes no gap even though it
        // starts later and ends earlier than Monday's classes.
        let a = course(
            "A",
            5.0,
            &[(Weekday::Monday, 8, 10), (Weekday::Wednesday, 12, 14)],
        );
        let b = course("B", 5.0, &[(Weekday::Monday, 12, 14)]);

        let m = compute_metrics(&[&a, &b]);
        assert_eq!(m.num_days, 2);
        assert_eq!(m.gap_time, 2); // Monday 8..14 span 6 − 4 class hours
    }

    #[test]
    fn test_back_to_back_day_has_no_gap() {
        let a = course("A", 5.0, &[(Weekday::Monday, 9, 11)]);
        let b = course("B", 5.0, &[(Weekday::Monday, 11, 13)]);

        let m = compute_metrics(&[&a, &b]);
        assert_eq!(m.gap_time, 0);
        assert_eq!(m.max_consecutive, 4);
    }

    #[test]
    fn test_max_consecutive_is_worst_day() {
        let a = course(
            "A",
            5.0,
            &[(Weekday::Monday, 9, 11), (Weekday::Friday, 8, 13)],
        );

        let m = compute_metrics(&[&a]);
        assert_eq!(m.max_consecutive, 5);
    }

    #[test]
    fn test_metrics_independent_of_course_order() {
        let a = course("A", 5.0, &[(Weekday::Monday, 9, 11)]);
        let b = course("B", 4.0, &[(Weekday::Tuesday, 10, 12)]);

        let ab = compute_metrics(&[&a, &b]);
        let ba = compute_metrics(&[&b, &a]);

        assert_eq!(ab.num_days, ba.num_days);
        assert_eq!(ab.gap_time, ba.gap_time);
        assert_eq!(ab.max_consecutive, ba.max_consecutive);
        assert_eq!(ab.total_hours, ba.total_hours);
        assert_eq!(ab.total_credits, ba.total_credits);
        assert_eq!(ab.earliest_start, ba.earliest_start);
        assert_eq!(ab.latest_end, ba.latest_end);
    }

    #[test]
    fn test_metrics_empty_combination() {
        let m = compute_metrics(&[]);
        assert_eq!(m.num_days, 0);
        assert_eq!(m.gap_time, 0);
        assert_eq!(m.total_hours, 0);
        assert_eq!(m.earliest_start, 0);
        assert_eq!(m.latest_end, 0);
    }
}
