//! Course and schedule domain models.
//!
//! Provides the data types the search and ranking engines operate on:
//! weekly meeting slots, courses, the catalog, and the candidate records
//! the pipeline produces.
//!
//! | Type | Role |
//! |------|------|
//! | [`Slot`] | One recurring weekly meeting interval |
//! | [`Course`] | Code + institution + credits + slots |
//! | [`Catalog`] | Insertion-ordered course collection |
//! | [`ScheduleCandidate`] | Feasible combination with cached metrics |
//! | [`SavedSchedule`] | Minimal persistence record |

mod candidate;
mod catalog;
mod course;
mod slot;

pub use candidate::{SavedSchedule, ScheduleCandidate};
pub use catalog::Catalog;
pub use course::{Course, RawCourse};
pub use slot::{parse_pattern, Slot, Weekday, WeeklyPattern};
