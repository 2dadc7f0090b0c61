//! Error types for schedule parsing, search, and ranking.
//!
//! Two failure classes exist: a course's raw weekly pattern that cannot be
//! decoded, and a caller-supplied configuration that is internally
//! inconsistent. A search that merely finds nothing returns an empty
//! result, never an error.

use thiserror::Error;

/// Result type for schedule operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors reported by the schedule engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A raw weekly-pattern entry could not be decoded into a slot.
    ///
    /// Fatal for that course; the caller decides whether to skip the
    /// course or abort the catalog load.
    #[error("malformed schedule entry '{entry}': {reason}")]
    MalformedSchedule {
        /// The offending time string (or token).
        entry: String,
        /// Why it could not be decoded.
        reason: String,
    },

    /// The search or ranking configuration is internally inconsistent.
    ///
    /// Reported before any enumeration work is performed.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl ScheduleError {
    pub(crate) fn malformed(entry: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedSchedule {
            entry: entry.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
