//! Shared test fixtures for Cohort crates.
//!
//! Provides entity builders and a seeded random population generator for
//! end-to-end solver runs.
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! cohort-test = { workspace = true }
//! ```

use cohort_core::{Entity, EntityList};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Builds a single entity.
pub fn entity(name: &str, count: i32, strength: i32) -> Entity {
    Entity::new(name, count, strength)
}

/// Builds an entity list from `(name, count, strength)` triples.
pub fn entities(records: &[(&str, i32, i32)]) -> EntityList {
    records
        .iter()
        .map(|&(name, count, strength)| Entity::new(name, count, strength))
        .collect()
}

/// Generates a reproducible random population.
///
/// Counts are drawn from 1..=10 (the extraction scan requires positive
/// counts) and strengths from 0..=300. A ChaCha stream keeps the same seed
/// producing the same population on every platform.
pub fn random_population(len: usize, seed: u64) -> EntityList {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|i| {
            Entity::new(
                format!("E{i}"),
                rng.random_range(1..=10),
                rng.random_range(0..=300),
            )
        })
        .collect()
}
