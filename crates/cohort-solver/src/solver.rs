//! Retry/fallback orchestration.
//!
//! Logging levels:
//! - **INFO**: solve start/end with population scale and outcome
//! - **DEBUG**: per-round extraction summaries and reshuffle decisions
//! - **TRACE**: per-entity extraction details (see `extractor`)

use std::fmt;

use cohort_config::SolverConfig;
use cohort_core::{CohortError, EntityList, Result, SamplePair};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::extractor::extract_groups;
use crate::similarity::find_similar_pair;
use crate::statistics::{RoundStatistics, SolveStatistics};

/// Outcome of a solve attempt.
///
/// Running out of fallback rounds is expected behavior, not an error; fatal
/// input errors are reported through [`CohortError`] instead.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    /// A reliable, similar pair of groups was found.
    Solved(SamplePair),
    /// All fallback rounds were exhausted without a reliable, similar pair.
    Exhausted,
}

impl SolveOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved(_))
    }

    /// Returns the sample pair, if one was found.
    pub fn solution(self) -> Option<SamplePair> {
        match self {
            SolveOutcome::Solved(pair) => Some(pair),
            SolveOutcome::Exhausted => None,
        }
    }
}

/// Orchestrates group extraction and similarity selection across a bounded
/// number of rounds, reshuffling the population between rounds on failure.
///
/// The solver owns its entity list exclusively. Each round drains a clone of
/// the list; the list itself is only reshuffled between rounds, so a retry
/// always sees the whole population in a new order.
///
/// # Example
///
/// ```
/// use cohort_core::Entity;
/// use cohort_solver::Solver;
///
/// let population = vec![
///     Entity::new("A", 4, 10),
///     Entity::new("B", 3, 2),
///     Entity::new("C", 1, 10),
///     Entity::new("D", 2, 2),
///     Entity::new("E", 4, 2),
///     Entity::new("F", 5, 10),
/// ];
///
/// let mut solver = Solver::new(population);
/// let outcome = solver.try_solve().unwrap();
/// assert!(outcome.is_solved());
/// assert_eq!(solver.fallback_rounds(), 0);
/// ```
pub struct Solver {
    list: EntityList,
    config: SolverConfig,
    rng: StdRng,
    fallback_rounds: u32,
    statistics: SolveStatistics,
}

impl fmt::Debug for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solver")
            .field("entities", &self.list.len())
            .field("config", &self.config)
            .field("fallback_rounds", &self.fallback_rounds)
            .finish()
    }
}

impl Solver {
    /// Creates a solver over `list` with default configuration and an
    /// OS-seeded random source.
    pub fn new(list: EntityList) -> Self {
        Self {
            list,
            config: SolverConfig::default(),
            rng: StdRng::from_os_rng(),
            fallback_rounds: 0,
            statistics: SolveStatistics::default(),
        }
    }

    /// Replaces the configuration. A `seed` in the configuration reseeds
    /// the random source.
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        if let Some(seed) = config.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
        self.config = config;
        self
    }

    /// Reseeds the random source for deterministic reshuffles.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Current population, in its current order.
    pub fn list(&self) -> &EntityList {
        &self.list
    }

    /// Replaces the population, e.g. with corrected input after a fatal
    /// error.
    pub fn set_list(&mut self, list: EntityList) {
        self.list = list;
    }

    /// Index of the last fallback round reached by the previous solve.
    ///
    /// Diagnostic only; not meant for control-flow decisions by callers.
    pub fn fallback_rounds(&self) -> u32 {
        self.fallback_rounds
    }

    /// Per-round diagnostics of the previous solve.
    pub fn statistics(&self) -> &SolveStatistics {
        &self.statistics
    }

    /// Runs up to `max_fallback_rounds` extraction-plus-similarity rounds.
    ///
    /// Each failed round reshuffles the population before the next attempt.
    /// Fatal input errors ([`CohortError::EmptyInput`],
    /// [`CohortError::InvalidCount`]) abort immediately; the caller supplies
    /// corrected input before retrying. Exhausting the budget yields
    /// [`SolveOutcome::Exhausted`], which is not an error.
    pub fn try_solve(&mut self) -> Result<SolveOutcome> {
        if self.list.is_empty() {
            return Err(CohortError::EmptyInput);
        }

        let reliable_sample_size = self.reliable_sample_size();
        self.statistics = SolveStatistics::default();

        info!(
            entities = self.list.len(),
            reliable_sample_size,
            max_rounds = self.config.max_fallback_rounds,
            "starting solve"
        );

        for round in 0..self.config.max_fallback_rounds {
            self.fallback_rounds = round;

            let candidates = extract_groups(self.list.clone(), self.config.target_count)?;
            let group_count = candidates.len();
            let grouped_entities: usize = candidates.iter().map(|g| g.len()).sum();
            let reliable = grouped_entities >= reliable_sample_size;

            debug!(
                round,
                groups = group_count,
                grouped_entities,
                reliable,
                "extraction pass complete"
            );

            let solution = reliable
                .then(|| find_similar_pair(candidates, self.config.target_count))
                .flatten();

            self.statistics.record(RoundStatistics {
                round,
                group_count,
                grouped_entities,
                reliable,
                pair_found: solution.is_some(),
            });

            if let Some(pair) = solution {
                info!(round, "similar pair found");
                return Ok(SolveOutcome::Solved(pair));
            }

            debug!(round, "no reliable similar pair, reshuffling population");
            self.list.shuffle(&mut self.rng);
        }

        info!(
            rounds = self.config.max_fallback_rounds,
            "fallback budget exhausted without a similar pair"
        );
        Ok(SolveOutcome::Exhausted)
    }

    /// Minimum grouped-entity total required to trust a round's statistical
    /// result.
    fn reliable_sample_size(&self) -> usize {
        let fraction = (self.config.sample_fraction * self.list.len() as f64).ceil() as usize;
        fraction.max(self.config.min_sample_size)
    }
}
