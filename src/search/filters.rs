//! Search configuration and hard-constraint evaluation.
//!
//! [`SearchFilters`] is the per-call configuration record: credit range,
//! mandatory/excluded course sets, day limit, and the three toggleable
//! constraints. Feasibility checks run cheapest-first and short-circuit;
//! a failing combination is simply excluded from the result, never an
//! error.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use super::conflict::conflict_free;
use super::merge::{merge_day, slots_by_day, Interval};
use crate::error::{Result, ScheduleError};
use crate::models::{Course, Weekday};

/// Default bound on one day's contiguous class time, in hours.
pub const DEFAULT_CONSECUTIVE_THRESHOLD: i32 = 6;

/// Hard filters for one search invocation.
///
/// The three toggleable constraints (no-conflict, single institution per
/// day, contiguous-hours bound) start enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Inclusive lower credit bound.
    pub min_credits: f64,
    /// Inclusive upper credit bound.
    pub max_credits: f64,
    /// Courses every schedule must contain.
    pub mandatory: BTreeSet<String>,
    /// Courses removed from the candidate pool before enumeration.
    pub excluded: BTreeSet<String>,
    /// Maximum number of distinct class days.
    pub max_days: usize,
    /// Reject combinations with overlapping slots.
    pub no_conflicts: bool,
    /// Reject days mixing courses from different institutions.
    ///
    /// Cross-campus travel time is not modeled, so mixing institutions on
    /// one day is disallowed outright rather than penalized.
    pub single_institution_day: bool,
    /// Bound each day's longest contiguous class block.
    pub limit_consecutive: bool,
    /// Contiguous-block bound in hours, applied when `limit_consecutive`.
    pub consecutive_threshold: i32,
}

impl SearchFilters {
    /// Creates filters with the given credit range and day limit.
    pub fn new(min_credits: f64, max_credits: f64, max_days: usize) -> Self {
        Self {
            min_credits,
            max_credits,
            mandatory: BTreeSet::new(),
            excluded: BTreeSet::new(),
            max_days,
            no_conflicts: true,
            single_institution_day: true,
            limit_consecutive: true,
            consecutive_threshold: DEFAULT_CONSECUTIVE_THRESHOLD,
        }
    }

    /// Sets the mandatory course set.
    pub fn with_mandatory<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mandatory = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the excluded course set.
    pub fn with_excluded<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Toggles the no-conflict constraint.
    pub fn with_no_conflicts(mut self, enabled: bool) -> Self {
        self.no_conflicts = enabled;
        self
    }

    /// Toggles the single-institution-per-day constraint.
    pub fn with_single_institution_day(mut self, enabled: bool) -> Self {
        self.single_institution_day = enabled;
        self
    }

    /// Toggles the contiguous-hours bound.
    pub fn with_consecutive_limit(mut self, enabled: bool) -> Self {
        self.limit_consecutive = enabled;
        self
    }

    /// Sets the contiguous-hours bound.
    pub fn with_consecutive_threshold(mut self, hours: i32) -> Self {
        self.consecutive_threshold = hours;
        self
    }

    /// Checks internal consistency before any enumeration work.
    ///
    /// Rejects an inverted or negative credit range, a zero day limit, a
    /// non-positive contiguous bound (when active), and any course listed
    /// as both mandatory and excluded.
    pub fn validate(&self) -> Result<()> {
        if self.min_credits > self.max_credits {
            return Err(ScheduleError::config(format!(
                "credit range is inverted: min {} > max {}",
                self.min_credits, self.max_credits
            )));
        }
        if self.min_credits < 0.0 {
            return Err(ScheduleError::config("min_credits must be non-negative"));
        }
        if self.max_days == 0 {
            return Err(ScheduleError::config("max_days must be at least 1"));
        }
        if self.limit_consecutive && self.consecutive_threshold <= 0 {
            return Err(ScheduleError::config(
                "consecutive_threshold must be positive",
            ));
        }

        let overlap: Vec<&str> = self
            .mandatory
            .intersection(&self.excluded)
            .map(String::as_str)
            .collect();
        if !overlap.is_empty() {
            return Err(ScheduleError::config(format!(
                "courses listed as both mandatory and excluded: {}",
                overlap.join(", ")
            )));
        }

        Ok(())
    }

    /// Whether a combination satisfies every active constraint.
    ///
    /// Mandatory inclusion is not re-checked here — the enumerator skips
    /// subsets that omit a mandatory course before any cost is incurred.
    pub fn is_feasible(&self, combination: &[&Course]) -> bool {
        let credits: f64 = combination.iter().map(|c| c.credits).sum();
        if credits < self.min_credits || credits > self.max_credits {
            return false;
        }

        if self.no_conflicts && !conflict_free(combination) {
            return false;
        }

        if self.single_institution_day && !single_institution_per_day(combination) {
            return false;
        }

        let days = slots_by_day(combination);
        if self.limit_consecutive {
            for slots in days.values() {
                let longest = merge_day(slots)
                    .iter()
                    .map(Interval::duration)
                    .max()
                    .unwrap_or(0);
                if longest > self.consecutive_threshold {
                    return false;
                }
            }
        }

        days.len() <= self.max_days
    }
}

/// Whether every class day draws its courses from a single institution.
fn single_institution_per_day(combination: &[&Course]) -> bool {
    let mut day_institution: BTreeMap<Weekday, &str> = BTreeMap::new();
    for course in combination {
        for slot in &course.slots {
            match day_institution.entry(slot.day) {
                Entry::Vacant(e) => {
                    e.insert(course.institution.as_str());
                }
                Entry::Occupied(e) => {
                    if *e.get() != course.institution.as_str() {
                        return false;
                    }
                }
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Slot, Weekday};

    fn course(code: &str, institution: &str, credits: f64, slots: &[(Weekday, i32, i32)]) -> Course {
        let mut c = Course::new(code, institution, credits);
        for &(day, start, end) in slots {
            c = c.with_slot(Slot::new(day, start, end, "lecture"));
        }
        c
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(SearchFilters::new(0.0, 30.0, 5).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_credit_range() {
        let err = SearchFilters::new(20.0, 10.0, 5).validate().unwrap_err();
        assert!(matches!(err, ScheduleError::Configuration(_)));
    }

    #[test]
    fn test_validate_rejects_negative_credits() {
        assert!(SearchFilters::new(-1.0, 10.0, 5).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_max_days() {
        assert!(SearchFilters::new(0.0, 30.0, 0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_mandatory_excluded_overlap() {
        let filters = SearchFilters::new(0.0, 30.0, 5)
            .with_mandatory(["AI101", "ML201"])
            .with_excluded(["ML201"]);
        let err = filters.validate().unwrap_err();
        match err {
            ScheduleError::Configuration(msg) => assert!(msg.contains("ML201")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_nonpositive_threshold() {
        let filters = SearchFilters::new(0.0, 30.0, 5).with_consecutive_threshold(0);
        assert!(filters.validate().is_err());
        // Irrelevant once the bound is disabled.
        let filters = filters.with_consecutive_limit(false);
        assert!(filters.validate().is_ok());
    }

    #[test]
    fn test_credit_bounds_inclusive() {
        let a = course("A", "X", 5.0, &[(Weekday::Monday, 9, 11)]);
        let filters = SearchFilters::new(5.0, 5.0, 5);
        assert!(filters.is_feasible(&[&a]));

        let filters = SearchFilters::new(5.5, 6.0, 5);
        assert!(!filters.is_feasible(&[&a]));
    }

    #[test]
    fn test_conflict_constraint_toggle() {
        let a = course("A", "X", 5.0, &[(Weekday::Monday, 9, 11)]);
        let b = course("B", "X", 5.0, &[(Weekday::Monday, 10, 12)]);
        let combo = [&a, &b];

        assert!(!SearchFilters::new(0.0, 30.0, 5).is_feasible(&combo));
        assert!(SearchFilters::new(0.0, 30.0, 5)
            .with_no_conflicts(false)
            .is_feasible(&combo));
    }

    #[test]
    fn test_single_institution_day_toggle() {
        let a = course("A", "X", 5.0, &[(Weekday::Monday, 9, 11)]);
        let b = course("B", "Y", 5.0, &[(Weekday::Monday, 11, 13)]);
        let combo = [&a, &b];

        assert!(!SearchFilters::new(0.0, 30.0, 5).is_feasible(&combo));
        assert!(SearchFilters::new(0.0, 30.0, 5)
            .with_single_institution_day(false)
            .is_feasible(&combo));
    }

    #[test]
    fn test_different_institutions_on_different_days_allowed() {
        let a = course("A", "X", 5.0, &[(Weekday::Monday, 9, 11)]);
        let b = course("B", "Y", 5.0, &[(Weekday::Tuesday, 9, 11)]);
        assert!(SearchFilters::new(0.0, 30.0, 5).is_feasible(&[&a, &b]));
    }

    #[test]
    fn test_consecutive_bound_exact_threshold_passes() {
        // Three back-to-back slots merge into one 6-hour block.
        let a = course(
            "A",
            "X",
            5.0,
            &[(Weekday::Monday, 8, 10), (Weekday::Monday, 10, 12)],
        );
        let b = course("B", "X", 5.0, &[(Weekday::Monday, 12, 14)]);
        assert!(SearchFilters::new(0.0, 30.0, 5).is_feasible(&[&a, &b]));
    }

    #[test]
    fn test_consecutive_bound_excludes_seven_hours() {
        let a = course(
            "A",
            "X",
            5.0,
            &[(Weekday::Monday, 8, 12), (Weekday::Monday, 12, 15)],
        );
        let filters = SearchFilters::new(0.0, 30.0, 5);
        assert!(!filters.is_feasible(&[&a]));
        // Disabled: the same combination passes.
        assert!(filters.with_consecutive_limit(false).is_feasible(&[&a]));
    }

    #[test]
    fn test_max_days_limit() {
        let a = course(
            "A",
            "X",
            5.0,
            &[(Weekday::Monday, 9, 11), (Weekday::Wednesday, 9, 11)],
        );
        let b = course("B", "X", 5.0, &[(Weekday::Friday, 9, 11)]);

        assert!(SearchFilters::new(0.0, 30.0, 3).is_feasible(&[&a, &b]));
        assert!(!SearchFilters::new(0.0, 30.0, 2).is_feasible(&[&a, &b]));
    }
}
