//! Weekly class-schedule search and ranking.
//!
//! Given a course catalog — each course with a credit weight, a host
//! institution, and recurring weekly meeting slots — this crate enumerates
//! every feasible course combination under a set of hard constraints,
//! computes a fixed set of schedule-quality metrics for each, and ranks
//! the survivors by a user-weighted penalty score (lower is better).
//!
//! # Modules
//!
//! - **`models`**: Domain types — [`Weekday`], [`Slot`], [`Course`],
//!   [`Catalog`], [`ScheduleCandidate`], [`SavedSchedule`]
//! - **`search`**: [`SearchFilters`] and the exhaustive [`search()`]
//!   driver, plus the conflict-detection and interval-merge primitives it
//!   builds on
//! - **`ranking`**: [`RankWeights`], [`RankedCandidate`], and [`rank()`]
//!
//! # Example
//!
//! ```
//! use timetabler::models::{Catalog, Course, Slot, Weekday};
//! use timetabler::ranking::{rank, RankWeights};
//! use timetabler::search::{search, SearchFilters};
//!
//! let catalog = Catalog::new()
//!     .with_course(
//!         Course::new("AI101", "UPC", 5.0)
//!             .with_slot(Slot::new(Weekday::Monday, 9, 11, "lecture")),
//!     )
//!     .with_course(
//!         Course::new("ML201", "UPC", 5.0)
//!             .with_slot(Slot::new(Weekday::Monday, 11, 13, "lecture")),
//!     );
//!
//! let filters = SearchFilters::new(10.0, 10.0, 5);
//! let candidates = search(&catalog, &filters).unwrap();
//! assert_eq!(candidates.len(), 1);
//!
//! let ranked = rank(&candidates, &RankWeights::default()).unwrap();
//! assert_eq!(ranked[0].candidate.course_codes, ["AI101", "ML201"]);
//! ```
//!
//! # Determinism
//!
//! One search is one blocking call over immutable inputs. Enumeration
//! order is fixed (subset size ascending, catalog order within each size)
//! and the ranking sort is stable, so results are reproducible for a
//! given catalog ordering.

pub mod error;
pub mod models;
pub mod ranking;
pub mod search;

pub use error::{Result, ScheduleError};
pub use models::{Catalog, Course, SavedSchedule, ScheduleCandidate, Slot, Weekday};
pub use ranking::{rank, RankWeights, RankedCandidate};
pub use search::{search, SearchFilters};
