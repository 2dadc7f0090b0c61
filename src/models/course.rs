//! Course model.
//!
//! A course is read-only reference data for the duration of a search:
//! identity, host institution, credit weight, and parsed weekly slots.

use serde::{Deserialize, Serialize};

use super::slot::{parse_pattern, Slot, WeeklyPattern};
use crate::error::Result;

/// A raw catalog entry as supplied by the catalog collaborator.
///
/// The course code is the catalog map's key, not a field. Aliases accept
/// the field names used by existing catalog files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCourse {
    /// Host institution.
    #[serde(alias = "University")]
    pub institution: String,
    /// Credit weight (e.g. ECTS).
    #[serde(alias = "ECTS")]
    pub credits: f64,
    /// Weekly pattern: class-kind label → `"Day HH-HH"` strings.
    #[serde(alias = "Schedule")]
    pub schedule: WeeklyPattern,
}

/// A course offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course code.
    pub code: String,
    /// Host institution.
    pub institution: String,
    /// Credit weight.
    pub credits: f64,
    /// Weekly meeting slots, in pattern order.
    pub slots: Vec<Slot>,
}

impl Course {
    /// Creates a course with no slots.
    pub fn new(code: impl Into<String>, institution: impl Into<String>, credits: f64) -> Self {
        Self {
            code: code.into(),
            institution: institution.into(),
            credits,
            slots: Vec::new(),
        }
    }

    /// Adds a meeting slot.
    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.slots.push(slot);
        self
    }

    /// Parses a course from a raw weekly pattern.
    pub fn from_pattern(
        code: impl Into<String>,
        institution: impl Into<String>,
        credits: f64,
        pattern: &WeeklyPattern,
    ) -> Result<Self> {
        Ok(Self {
            code: code.into(),
            institution: institution.into(),
            credits,
            slots: parse_pattern(pattern)?,
        })
    }

    /// Parses a course from a raw catalog entry.
    pub fn from_raw(code: impl Into<String>, raw: &RawCourse) -> Result<Self> {
        Self::from_pattern(code, raw.institution.clone(), raw.credits, &raw.schedule)
    }

    /// Total weekly class hours across all slots.
    pub fn total_hours(&self) -> i32 {
        self.slots.iter().map(Slot::duration).sum()
    }
}
