//! Exhaustive combination enumeration.
//!
//! Generates every subset of the exclusion-trimmed catalog, from size
//! |mandatory| up to the pool size, delegating feasibility to
//! [`SearchFilters`] and metric computation to the metric calculator.
//!
//! # Complexity
//! O(2ⁿ) over the pool — the unavoidable cost of exhaustive search.
//! Catalogs are expected to be small (tens of courses); callers pre-filter
//! by institution before searching.

use log::debug;

use super::filters::SearchFilters;
use super::metrics::compute_metrics;
use crate::error::Result;
use crate::models::{Catalog, Course, ScheduleCandidate};

/// Lexicographic k-subset iterator.
///
/// Yields every strictly increasing index vector of length `k` over
/// `0..n`, in lexicographic order. For `k == 0` it yields one empty
/// subset; for `k > n` it yields nothing.
struct Combinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        // Find the rightmost index that can still advance.
        let mut i = self.k;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] != i + self.n - self.k {
                break;
            }
        }

        self.indices[i] += 1;
        for j in i + 1..self.k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// Enumerates every feasible schedule in the catalog.
///
/// Excluded courses are removed from the pool before enumeration begins;
/// subsets omitting a mandatory course are skipped before any constraint
/// cost is incurred. Survivors of the full constraint set get a metric
/// snapshot and are returned in enumeration order (subset size ascending,
/// catalog order within each size).
///
/// An empty result is a normal outcome — the filters admitted no
/// combination — not an error.
///
/// # Errors
/// [`ScheduleError::Configuration`](crate::ScheduleError::Configuration)
/// if the filters are internally inconsistent; nothing is enumerated in
/// that case.
pub fn search(catalog: &Catalog, filters: &SearchFilters) -> Result<Vec<ScheduleCandidate>> {
    filters.validate()?;

    let pool: Vec<&Course> = catalog
        .iter()
        .filter(|c| !filters.excluded.contains(&c.code))
        .collect();

    let mut candidates = Vec::new();
    let mut generated: u64 = 0;
    for r in filters.mandatory.len()..=pool.len() {
        for indices in Combinations::new(pool.len(), r) {
            generated += 1;
            let combination: Vec<&Course> = indices.iter().map(|&i| pool[i]).collect();

            let has_mandatory = filters
                .mandatory
                .iter()
                .all(|code| combination.iter().any(|c| &c.code == code));
            if !has_mandatory {
                continue;
            }

            if filters.is_feasible(&combination) {
                candidates.push(compute_metrics(&combination));
            }
        }
    }

    debug!(
        "searched {generated} combinations over {} courses, {} feasible",
        pool.len(),
        candidates.len()
    );
    Ok(candidates)
}
