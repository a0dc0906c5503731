//! Error types for Cohort

use thiserror::Error;

/// Fatal input errors for Cohort operations.
///
/// Both kinds abort the current operation entirely; no partial result is
/// returned. Exhausting the fallback budget is not an error and is reported
/// as a plain solver outcome instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CohortError {
    /// Solve was invoked with an empty entity list.
    #[error("cannot solve an empty entity list")]
    EmptyInput,

    /// An entity with a non-positive count reached the accumulation scan.
    #[error("entity {name:?} has non-positive count {count}; only positive counts are allowed")]
    InvalidCount {
        /// Name of the offending entity.
        name: String,
        /// The rejected count value.
        count: i32,
    },
}

/// Result type alias for Cohort operations
pub type Result<T> = std::result::Result<T, CohortError>;
