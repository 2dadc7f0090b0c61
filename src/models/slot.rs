//! Weekly meeting slot model and pattern parsing.
//!
//! A course's raw weekly pattern maps a class-kind label (lecture, lab, …)
//! to time strings of the form `"<Day> <start>-<end>"`, e.g.
//! `"Monday 9-11"`. Parsing flattens the pattern into immutable [`Slot`]
//! records, one per (kind, time string) pair.
//!
//! # Time Model
//! Hours are integer clock hours within a recurring 5-day week; there is
//! no date or timezone semantics. Intervals are half-open by convention:
//! a slot ending at 12 and one starting at 12 touch but do not overlap.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ScheduleError};

/// Raw weekly pattern: class-kind label → `"Day HH-HH"` time strings.
pub type WeeklyPattern = BTreeMap<String, Vec<String>>;

/// Weekday of a recurring slot. Weekend days are not modeled.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All modeled weekdays, in week order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Full English day name.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Monday" => Ok(Weekday::Monday),
            "Tuesday" => Ok(Weekday::Tuesday),
            "Wednesday" => Ok(Weekday::Wednesday),
            "Thursday" => Ok(Weekday::Thursday),
            "Friday" => Ok(Weekday::Friday),
            other => Err(ScheduleError::malformed(other, "unknown weekday")),
        }
    }
}

/// One recurring weekly meeting interval.
///
/// `start < end` holds for every parsed slot. No upper hour bound is
/// enforced by the model; catalogs observed in practice stay within 8–20.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Day of the week.
    pub day: Weekday,
    /// Start hour (inclusive).
    pub start: i32,
    /// End hour (exclusive).
    pub end: i32,
    /// Class-kind label (e.g. "lecture", "lab").
    pub kind: String,
}

impl Slot {
    /// Creates a new slot.
    pub fn new(day: Weekday, start: i32, end: i32, kind: impl Into<String>) -> Self {
        Self {
            day,
            start,
            end,
            kind: kind.into(),
        }
    }

    /// Duration in hours.
    #[inline]
    pub fn duration(&self) -> i32 {
        self.end - self.start
    }

    /// Whether two slots overlap strictly.
    ///
    /// Slots on different days never overlap; on the same day, touching
    /// end points (`self.end == other.start`) do not count as overlap.
    pub fn overlaps(&self, other: &Slot) -> bool {
        self.day == other.day && self.start.max(other.start) < self.end.min(other.end)
    }
}

/// Parses one `"<Day> <start>-<end>"` time string into a slot.
fn parse_time_string(kind: &str, raw: &str) -> Result<Slot> {
    let mut parts = raw.split_whitespace();
    let (Some(day), Some(hours), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ScheduleError::malformed(
            raw,
            "expected '<Day> <start>-<end>'",
        ));
    };

    let day: Weekday = day.parse()?;

    let Some((start, end)) = hours.split_once('-') else {
        return Err(ScheduleError::malformed(raw, "missing '-' in hour range"));
    };
    let start: i32 = start
        .parse()
        .map_err(|_| ScheduleError::malformed(raw, "start hour is not an integer"))?;
    let end: i32 = end
        .parse()
        .map_err(|_| ScheduleError::malformed(raw, "end hour is not an integer"))?;

    if start >= end {
        return Err(ScheduleError::malformed(
            raw,
            "start hour must precede end hour",
        ));
    }

    Ok(Slot::new(day, start, end, kind))
}

/// Flattens a raw weekly pattern into slots.
///
/// Slots appear in pattern iteration order: kinds in map order, time
/// strings in list order. Fails on the first entry that cannot be decoded.
pub fn parse_pattern(pattern: &WeeklyPattern) -> Result<Vec<Slot>> {
    let mut slots = Vec::new();
    for (kind, times) in pattern {
        for raw in times {
            slots.push(parse_time_string(kind, raw)?);
        }
    }
    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(entries: &[(&str, &[&str])]) -> WeeklyPattern {
        entries
            .iter()
            .map(|(kind, times)| {
                (
                    kind.to_string(),
                    times.iter().map(|t| t.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_parse_pattern() {
        let p = pattern(&[
            ("lecture", &["Monday 9-11", "Wednesday 9-11"]),
            ("lab", &["Friday 10-12"]),
        ]);
        let slots = parse_pattern(&p).unwrap();

        // BTreeMap keys iterate sorted: "lab" before "lecture".
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0], Slot::new(Weekday::Friday, 10, 12, "lab"));
        assert_eq!(slots[1], Slot::new(Weekday::Monday, 9, 11, "lecture"));
        assert_eq!(slots[2], Slot::new(Weekday::Wednesday, 9, 11, "lecture"));
    }

    #[test]
    fn test_parse_rejects_missing_hour_range() {
        let p = pattern(&[("lecture", &["Monday"])]);
        let err = parse_pattern(&p).unwrap_err();
        assert!(matches!(err, ScheduleError::MalformedSchedule { .. }));
    }

    #[test]
    fn test_parse_rejects_extra_tokens() {
        let p = pattern(&[("lecture", &["Monday 9-11 extra"])]);
        assert!(parse_pattern(&p).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_day() {
        let p = pattern(&[("lecture", &["Saturday 9-11"])]);
        let err = parse_pattern(&p).unwrap_err();
        match err {
            ScheduleError::MalformedSchedule { entry, reason } => {
                assert_eq!(entry, "Saturday");
                assert_eq!(reason, "unknown weekday");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_non_integer_hours() {
        let p = pattern(&[("lecture", &["Monday 9:00-11"])]);
        assert!(parse_pattern(&p).is_err());

        let p = pattern(&[("lecture", &["Monday 9-eleven"])]);
        assert!(parse_pattern(&p).is_err());
    }

    #[test]
    fn test_parse_rejects_inverted_range() {
        let p = pattern(&[("lecture", &["Monday 11-9"])]);
        assert!(parse_pattern(&p).is_err());

        let p = pattern(&[("lecture", &["Monday 9-9"])]);
        assert!(parse_pattern(&p).is_err());
    }

    #[test]
    fn test_slot_duration() {
        let slot = Slot::new(Weekday::Monday, 9, 12, "lecture");
        assert_eq!(slot.duration(), 3);
    }

    #[test]
    fn test_overlap_same_day() {
        let a = Slot::new(Weekday::Monday, 9, 11, "lecture");
        let b = Slot::new(Weekday::Monday, 10, 12, "lab");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_slots_do_not_overlap() {
        let a = Slot::new(Weekday::Monday, 10, 12, "lecture");
        let b = Slot::new(Weekday::Monday, 12, 14, "lab");
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_different_days_never_overlap() {
        let a = Slot::new(Weekday::Monday, 9, 11, "lecture");
        let b = Slot::new(Weekday::Tuesday, 9, 11, "lecture");
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_weekday_roundtrip() {
        for day in Weekday::ALL {
            assert_eq!(day.name().parse::<Weekday>().unwrap(), day);
        }
    }
}
