//! Schedule search: exhaustive enumeration over a course catalog.
//!
//! The driver ([`search`]) generates candidate combinations, the filter
//! record ([`SearchFilters`]) applies the hard constraints, and the
//! conflict/merge primitives supply the time arithmetic both constraints
//! and metrics share.

mod conflict;
mod enumerate;
mod filters;
mod merge;
mod metrics;

pub use conflict::{conflict_free, conflicts};
pub use enumerate::search;
pub use filters::{SearchFilters, DEFAULT_CONSECUTIVE_THRESHOLD};
pub use merge::{merge_day, slots_by_day, Interval};
pub use metrics::compute_metrics;
