//! Tests for statistical similarity selection.

use cohort_core::Group;
use cohort_test::entity;

use crate::similarity::{average_strengths, find_similar_pair, population_std_dev};

const SUM_OF_COUNTS: i32 = 5;

fn singleton_groups(strengths: &[i32]) -> Vec<Group> {
    strengths
        .iter()
        .enumerate()
        .map(|(i, &s)| Group::from_entities(vec![entity(&format!("G{i}"), SUM_OF_COUNTS, s)]))
        .collect()
}

#[test]
fn average_strengths_cover_every_group() {
    let groups = singleton_groups(&[1, 50, 100]);
    assert_eq!(
        average_strengths(&groups, SUM_OF_COUNTS),
        vec![1.0, 50.0, 100.0]
    );
}

#[test]
fn population_std_dev_matches_hand_computation() {
    // {1, 50, 100}: mean 50.33, variance 1633.56.
    let sigma = population_std_dev(&[1.0, 50.0, 100.0]);
    assert!((sigma - 40.417).abs() < 1e-3);
}

#[test]
fn population_std_dev_of_identical_samples_is_zero() {
    assert_eq!(population_std_dev(&[7.0, 7.0, 7.0]), 0.0);
    assert_eq!(population_std_dev(&[]), 0.0);
}

#[test]
fn spread_samples_have_no_similar_pair() {
    // Three samples spread evenly around 50: every gap exceeds σ ≈ 40.42.
    let groups = singleton_groups(&[1, 50, 100]);
    assert!(find_similar_pair(groups, SUM_OF_COUNTS).is_none());
}

#[test]
fn first_index_order_match_is_returned() {
    // 50 and 55 differ by 5 < σ and (1, 3) is the first qualifying pair in
    // ascending index order.
    let groups = singleton_groups(&[1, 50, 100, 55]);
    let pair = find_similar_pair(groups, SUM_OF_COUNTS).unwrap();
    assert_eq!(pair.first.entities()[0].strength, 50);
    assert_eq!(pair.second.entities()[0].strength, 55);
}

#[test]
fn selection_is_deterministic() {
    let first = find_similar_pair(singleton_groups(&[1, 50, 100, 55]), SUM_OF_COUNTS).unwrap();
    let second = find_similar_pair(singleton_groups(&[1, 50, 100, 55]), SUM_OF_COUNTS).unwrap();
    assert_eq!(first, second);
}

#[test]
fn fewer_than_two_groups_yield_nothing() {
    assert!(find_similar_pair(Vec::new(), SUM_OF_COUNTS).is_none());
    assert!(find_similar_pair(singleton_groups(&[42]), SUM_OF_COUNTS).is_none());
}

#[test]
fn two_group_deviation_is_degenerate() {
    // With two samples σ is half their gap, so the strict test never
    // passes; identical averages give 0 < 0, which fails too.
    assert!(find_similar_pair(singleton_groups(&[10, 12]), SUM_OF_COUNTS).is_none());
    assert!(find_similar_pair(singleton_groups(&[10, 10]), SUM_OF_COUNTS).is_none());
}

#[test]
fn multi_entity_groups_use_count_weighted_averages() {
    let close = Group::from_entities(vec![entity("A", 4, 10), entity("C", 1, 10)]);
    let far = Group::from_entities(vec![entity("B", 3, 2), entity("D", 2, 2)]);
    let singleton = Group::from_entities(vec![entity("F", 5, 10)]);

    let pair = find_similar_pair(vec![close, far, singleton], SUM_OF_COUNTS).unwrap();
    assert_eq!(pair.first.average_strength(SUM_OF_COUNTS), 10.0);
    assert_eq!(pair.second.average_strength(SUM_OF_COUNTS), 10.0);
}
