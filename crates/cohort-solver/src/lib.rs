//! Cohort Solver Engine
//!
//! This crate provides the algorithmic pipeline for extracting two
//! comparable samples from a weighted population:
//! - Greedy group extraction (`extractor`)
//! - Statistical similarity selection (`similarity`)
//! - Retry/fallback orchestration (`solver`)
//! - Per-round diagnostics (`statistics`)

pub mod extractor;
pub mod similarity;
pub mod solver;
pub mod statistics;

pub use extractor::extract_groups;
pub use similarity::{average_strengths, find_similar_pair, population_std_dev};
pub use solver::{SolveOutcome, Solver};
pub use statistics::{RoundStatistics, SolveStatistics};

#[cfg(test)]
mod similarity_tests;
