//! Cohort - extract two comparable samples from a weighted population.
//!
//! A greedy pass partitions an ordered population of weighted entities into
//! groups whose counts sum exactly to a target; a statistical rule then
//! picks the first pair of groups whose strength averages differ by less
//! than the population standard deviation of all averages. Failed rounds
//! reshuffle the population and retry, up to a bounded fallback budget.
//!
//! # Example
//!
//! ```
//! use cohort::{Entity, SolveOutcome, Solver};
//!
//! let population = vec![
//!     Entity::new("A", 4, 10),
//!     Entity::new("B", 3, 2),
//!     Entity::new("C", 1, 10),
//!     Entity::new("D", 2, 2),
//!     Entity::new("E", 4, 2),
//!     Entity::new("F", 5, 10),
//! ];
//!
//! let mut solver = Solver::new(population);
//! match solver.try_solve().unwrap() {
//!     SolveOutcome::Solved(pair) => {
//!         assert_eq!(pair.first.total_count(), 5);
//!         assert_eq!(pair.second.total_count(), 5);
//!     }
//!     SolveOutcome::Exhausted => unreachable!("the first pass groups this population"),
//! }
//! ```

// Data model
pub use cohort_core::{CandidateSet, CohortError, Entity, EntityList, Group, Result, SamplePair};

// Configuration
pub use cohort_config::{ConfigError, SolverConfig};

// Solver engine
pub use cohort_solver::{
    average_strengths, extract_groups, find_similar_pair, population_std_dev, RoundStatistics,
    SolveOutcome, SolveStatistics, Solver,
};
