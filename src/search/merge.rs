//! Per-day slot grouping and contiguous-interval merging.
//!
//! The max-contiguous-hours constraint and the gap-time metric must agree
//! on what counts as one contiguous class block, so both are built on the
//! same [`merge_day`] sweep: overlapping and exactly back-to-back slots
//! fold into one block; a gap closes the current block.

use std::collections::BTreeMap;

use crate::models::{Course, Slot, Weekday};

/// A contiguous `[start, end)` hour block within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// Block start hour (inclusive).
    pub start: i32,
    /// Block end hour (exclusive).
    pub end: i32,
}

impl Interval {
    /// Block length in hours.
    #[inline]
    pub fn duration(&self) -> i32 {
        self.end - self.start
    }
}

/// Groups a combination's slots by day, each day sorted by start hour.
///
/// The returned map iterates in week order; the per-day ordering is the
/// precondition for [`merge_day`].
pub fn slots_by_day<'a>(combination: &[&'a Course]) -> BTreeMap<Weekday, Vec<&'a Slot>> {
    let mut days: BTreeMap<Weekday, Vec<&Slot>> = BTreeMap::new();
    for course in combination {
        for slot in &course.slots {
            days.entry(slot.day).or_default().push(slot);
        }
    }
    for slots in days.values_mut() {
        slots.sort_by_key(|s| s.start);
    }
    days
}

/// Merges one day's slots into maximal contiguous blocks.
///
/// Precondition: `slots` sorted by start hour. A slot starting at or
/// before the current block's end extends the block (back-to-back classes
/// count as contiguous); otherwise the block is closed and a new one
/// opened. Output blocks are disjoint and in start order.
pub fn merge_day(slots: &[&Slot]) -> Vec<Interval> {
    let mut merged = Vec::new();
    let Some(first) = slots.first() else {
        return merged;
    };

    let mut current = Interval {
        start: first.start,
        end: first.end,
    };
    for slot in &slots[1..] {
        if slot.start <= current.end {
            current.end = current.end.max(slot.end);
        } else {
            merged.push(current);
            current = Interval {
                start: slot.start,
                end: slot.end,
            };
        }
    }
    merged.push(current);
    merged
}
