//! Course catalog.
//!
//! An insertion-ordered collection of courses. Ordering matters: the
//! search enumerates subsets in catalog order, and the ranking sort is
//! stable, so a fixed catalog order makes the whole pipeline
//! deterministic.

use serde::{Deserialize, Serialize};

use super::course::{Course, RawCourse};
use crate::error::Result;

/// An ordered collection of courses, keyed by unique course code.
///
/// How the catalog was stored (file, database, network) is the loading
/// collaborator's concern; this type only holds parsed courses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from raw entries, parsing each weekly pattern.
    ///
    /// Courses keep the iteration order of `entries`. Fails on the first
    /// entry whose pattern cannot be decoded.
    pub fn from_raw<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, RawCourse)>,
    {
        let mut catalog = Self::new();
        for (code, raw) in entries {
            catalog.add(Course::from_raw(code, &raw)?);
        }
        Ok(catalog)
    }

    /// Adds a course. Codes are assumed unique; a duplicate code replaces
    /// the earlier entry in place.
    pub fn add(&mut self, course: Course) {
        match self.courses.iter_mut().find(|c| c.code == course.code) {
            Some(existing) => *existing = course,
            None => self.courses.push(course),
        }
    }

    /// Builder: adds a course and returns self.
    pub fn with_course(mut self, course: Course) -> Self {
        self.add(course);
        self
    }

    /// Looks up a course by code.
    pub fn get(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.code == code)
    }

    /// Courses in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Distinct institutions, sorted.
    pub fn institutions(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.courses.iter().map(|c| c.institution.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// A copy of this catalog keeping only courses from the given
    /// institutions.
    ///
    /// Search cost is exponential in catalog size, so pre-filtering by
    /// institution before searching is the expected usage.
    pub fn filter_institutions(&self, keep: &[&str]) -> Catalog {
        Catalog {
            courses: self
                .courses
                .iter()
                .filter(|c| keep.contains(&c.institution.as_str()))
                .cloned()
                .collect(),
        }
    }
}
