//! Statistical similarity selection over candidate groups.
//!
//! Computes count-weighted average strengths, their population standard
//! deviation, and returns the first index-ordered pair of groups whose
//! averages differ by less than the deviation.

use cohort_core::{CandidateSet, Group, SamplePair};
use tracing::debug;

/// Count-weighted average strength of each group, normalized by
/// `sum_of_counts`.
pub fn average_strengths(groups: &[Group], sum_of_counts: i32) -> Vec<f64> {
    groups
        .iter()
        .map(|g| g.average_strength(sum_of_counts))
        .collect()
}

/// Population standard deviation of `samples`.
///
/// Mean of squared deviations divided by the sample count, not count minus
/// one. Returns 0.0 for an empty slice.
pub fn population_std_dev(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let len = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / len;
    let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / len;
    variance.sqrt()
}

/// First pair of indices (i, j), i < j, whose values differ by less than
/// `std_dev`, scanning in ascending i then ascending j.
fn pick_similar(strengths: &[f64], std_dev: f64) -> Option<(usize, usize)> {
    for i in 0..strengths.len().saturating_sub(1) {
        for j in (i + 1)..strengths.len() {
            // Convergence when |Xi - Xj| < σ.
            if (strengths[i] - strengths[j]).abs() < std_dev {
                return Some((i, j));
            }
        }
    }
    None
}

/// Picks the first pair of groups whose average strengths differ by less
/// than the population standard deviation of all averages.
///
/// Always the first index-order match, not the globally closest pair, so the
/// result is deterministic for a given candidate set. Returns `None` when
/// fewer than two groups are present or no pair satisfies the criterion.
pub fn find_similar_pair(mut groups: CandidateSet, sum_of_counts: i32) -> Option<SamplePair> {
    if groups.len() < 2 {
        return None;
    }

    let strengths = average_strengths(&groups, sum_of_counts);
    let std_dev = population_std_dev(&strengths);
    let (first, second) = pick_similar(&strengths, std_dev)?;

    debug!(first, second, std_dev, "similar pair selected");

    // first < second, so removing the later index first leaves the earlier
    // one in place.
    let second_group = groups.swap_remove(second);
    let first_group = groups.swap_remove(first);

    Some(SamplePair {
        first: first_group,
        second: second_group,
    })
}
