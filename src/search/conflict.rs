//! Pairwise time-conflict detection.
//!
//! Two slots conflict iff they fall on the same day and their intervals
//! overlap strictly; touching end points do not conflict. A combination
//! is conflict-free iff every pair of its courses' slot sets is.

use crate::models::{Course, Slot};

/// Whether any slot in `a` overlaps any slot in `b`.
pub fn conflicts(a: &[Slot], b: &[Slot]) -> bool {
    a.iter().any(|sa| b.iter().any(|sb| sa.overlaps(sb)))
}

/// Whether no two courses in the combination have overlapping slots.
///
/// O(k²) over the k courses, each pair doing an O(m·n) slot scan.
pub fn conflict_free(combination: &[&Course]) -> bool {
    for (i, a) in combination.iter().enumerate() {
        for b in &combination[i + 1..] {
            if conflicts(&a.slots, &b.slots) {
                return false;
            }
        }
    }
    true
}
