//! Feasible-schedule candidates and persistence snapshots.

use serde::{Deserialize, Serialize};

use super::catalog::Catalog;
use super::course::Course;

/// A feasible course combination with its cached quality metrics.
///
/// Produced by the metric calculator for every combination that passes
/// all active hard constraints. The metric fields are derived from the
/// combination once and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleCandidate {
    /// Course codes of the combination, in catalog order.
    pub course_codes: Vec<String>,
    /// Distinct days with at least one class.
    pub num_days: usize,
    /// Idle hours between classes, summed across days.
    pub gap_time: i32,
    /// Longest contiguous class block over all days (hours).
    pub max_consecutive: i32,
    /// Total weekly class hours.
    pub total_hours: i32,
    /// Sum of course credits.
    pub total_credits: f64,
    /// Earliest class start of the week (hour).
    pub earliest_start: i32,
    /// Latest class end of the week (hour).
    pub latest_end: i32,
}

impl ScheduleCandidate {
    /// Re-resolves the combination's courses against a catalog.
    ///
    /// Pairs every code with its course, or `None` for codes the catalog
    /// no longer carries — catalogs may change between saving a schedule
    /// and reloading it, and what to do about a missing code is the
    /// caller's decision.
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Vec<(&str, Option<&'a Course>)> {
        self.course_codes
            .iter()
            .map(|code| (code.as_str(), catalog.get(code)))
            .collect()
    }
}

/// Minimal serializable record of a chosen schedule.
///
/// Carries only course codes and the metric snapshot: enough for a
/// persistence collaborator to store the choice and later reconstruct the
/// combination by re-resolving codes against a (possibly updated)
/// catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSchedule {
    /// Course codes of the combination.
    pub course_codes: Vec<String>,
    /// Metric snapshot at the time of saving.
    pub metrics: ScheduleCandidate,
    /// Aggregate penalty under the weights active when saved.
    pub penalty: f64,
}
