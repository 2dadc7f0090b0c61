//! Weighted penalty ranking of feasible schedules.
//!
//! Each of the five ranked metrics (class days, gap time, longest
//! contiguous block, earliest start, latest end) is min-max normalized
//! across the candidate set, then combined into one penalty score via
//! caller-supplied weights. Lower penalty is strictly better.
//!
//! Normalization needs the whole candidate set up front: a metric's min
//! and max come from the full search result, and a metric on which every
//! candidate ties contributes exactly 0 for everyone.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::{SavedSchedule, ScheduleCandidate};

/// Non-negative penalty weights for the five ranked metrics.
///
/// Weights are normalized to sum to 1 before use, so only their ratios
/// matter. An all-zero vector is a configuration error, not a silent
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankWeights {
    /// Penalty weight for the number of class days.
    pub days: f64,
    /// Penalty weight for total gap time.
    pub gap: f64,
    /// Penalty weight for the longest contiguous block.
    pub consecutive: f64,
    /// Penalty weight for the earliest start hour.
    pub earliest: f64,
    /// Penalty weight for the latest end hour.
    pub latest: f64,
}

impl Default for RankWeights {
    /// Uniform weights across all five metrics.
    fn default() -> Self {
        Self::new(0.2, 0.2, 0.2, 0.2, 0.2)
    }
}

impl RankWeights {
    /// Creates a weight vector.
    pub fn new(days: f64, gap: f64, consecutive: f64, earliest: f64, latest: f64) -> Self {
        Self {
            days,
            gap,
            consecutive,
            earliest,
            latest,
        }
    }

    /// Returns the weights scaled to sum to 1.
    fn normalized(&self) -> Result<RankWeights> {
        let named = [
            ("days", self.days),
            ("gap", self.gap),
            ("consecutive", self.consecutive),
            ("earliest", self.earliest),
            ("latest", self.latest),
        ];
        for (name, w) in named {
            if w < 0.0 || !w.is_finite() {
                return Err(ScheduleError::config(format!(
                    "ranking weight '{name}' must be a non-negative finite number"
                )));
            }
        }

        let total = self.days + self.gap + self.consecutive + self.earliest + self.latest;
        if total <= 0.0 {
            return Err(ScheduleError::config(
                "at least one ranking weight must be positive",
            ));
        }

        Ok(Self::new(
            self.days / total,
            self.gap / total,
            self.consecutive / total,
            self.earliest / total,
            self.latest / total,
        ))
    }
}

/// A candidate with its normalized metric scores and aggregate penalty.
///
/// Normalized scores lie in `[0, 1]`; the penalty is their weighted sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    /// The underlying feasible schedule.
    pub candidate: ScheduleCandidate,
    /// Normalized number of class days.
    pub norm_days: f64,
    /// Normalized gap time.
    pub norm_gap: f64,
    /// Normalized longest contiguous block.
    pub norm_consecutive: f64,
    /// Normalized earliest start.
    pub norm_earliest: f64,
    /// Normalized latest end.
    pub norm_latest: f64,
    /// Weighted aggregate penalty; lower is better.
    pub penalty: f64,
}

impl RankedCandidate {
    /// Builds the minimal record the persistence collaborator stores.
    pub fn to_saved(&self) -> SavedSchedule {
        SavedSchedule {
            course_codes: self.candidate.course_codes.clone(),
            metrics: self.candidate.clone(),
            penalty: self.penalty,
        }
    }
}

/// Min-max normalization; a degenerate range contributes 0 for everyone.
fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max - min > 0.0 {
        (value - min) / (max - min)
    } else {
        0.0
    }
}

/// Ranks candidates by weighted normalized penalty, ascending.
///
/// The sort is stable: candidates with equal penalties keep their
/// enumeration order, which makes ranking deterministic for a
/// deterministic catalog ordering.
///
/// # Errors
/// [`ScheduleError::Configuration`] if any weight is negative or the
/// weight vector sums to zero.
pub fn rank(candidates: &[ScheduleCandidate], weights: &RankWeights) -> Result<Vec<RankedCandidate>> {
    let weights = weights.normalized()?;
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let bounds = |values: &mut dyn Iterator<Item = f64>| -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            min = min.min(v);
            max = max.max(v);
        }
        (min, max)
    };

    let (days_min, days_max) = bounds(&mut candidates.iter().map(|c| c.num_days as f64));
    let (gap_min, gap_max) = bounds(&mut candidates.iter().map(|c| c.gap_time as f64));
    let (consec_min, consec_max) = bounds(&mut candidates.iter().map(|c| c.max_consecutive as f64));
    let (early_min, early_max) = bounds(&mut candidates.iter().map(|c| c.earliest_start as f64));
    let (late_min, late_max) = bounds(&mut candidates.iter().map(|c| c.latest_end as f64));

    let mut ranked: Vec<RankedCandidate> = candidates
        .iter()
        .map(|c| {
            let norm_days = normalize(c.num_days as f64, days_min, days_max);
            let norm_gap = normalize(c.gap_time as f64, gap_min, gap_max);
            let norm_consecutive = normalize(c.max_consecutive as f64, consec_min, consec_max);
            let norm_earliest = normalize(c.earliest_start as f64, early_min, early_max);
            let norm_latest = normalize(c.latest_end as f64, late_min, late_max);

            let penalty = weights.days * norm_days
                + weights.gap * norm_gap
                + weights.consecutive * norm_consecutive
                + weights.earliest * norm_earliest
                + weights.latest * norm_latest;

            RankedCandidate {
                candidate: c.clone(),
                norm_days,
                norm_gap,
                norm_consecutive,
                norm_earliest,
                norm_latest,
                penalty,
            }
        })
        .collect();

    // Stable sort; penalties are finite by construction.
    ranked.sort_by(|a, b| a.penalty.total_cmp(&b.penalty));
    Ok(ranked)
}
