//! Greedy group extraction.
//!
//! Converts an entity list into disjoint groups whose counts sum exactly to
//! the target, via repeated left-to-right accumulation scans. The pass is a
//! linear greedy heuristic: depending on list order it can miss valid
//! groupings. The solver compensates with reshuffle-and-retry, not the
//! extractor.

use cohort_core::{CandidateSet, CohortError, Entity, EntityList, Group, Result};
use tracing::trace;

/// Indices accepted and dropped by one accumulation scan.
///
/// The scan never mutates the list it walks; removals are applied afterwards
/// from these index sets. Both sets are ascending and disjoint.
#[derive(Debug, Default)]
struct ScanSelection {
    selected: Vec<usize>,
    dropped: Vec<usize>,
    sum: i32,
}

impl ScanSelection {
    fn reached(&self, target: i32) -> bool {
        self.sum == target
    }
}

/// Walks `list` from the front, accumulating entity counts toward `target`.
///
/// Entities whose count exceeds the target are marked dropped. Entities that
/// would overshoot the running sum are skipped and stay available for later
/// scans. Fails fast on any non-positive count.
fn accumulate_from_head(list: &[Entity], target: i32) -> Result<ScanSelection> {
    let mut selection = ScanSelection::default();

    for (index, entity) in list.iter().enumerate() {
        if entity.count <= 0 {
            return Err(CohortError::InvalidCount {
                name: entity.name.clone(),
                count: entity.count,
            });
        }

        if entity.count > target {
            trace!(name = %entity.name, count = entity.count, "count exceeds target, disqualified");
            selection.dropped.push(index);
            continue;
        }

        let candidate_sum = selection.sum + entity.count;
        if candidate_sum > target {
            continue;
        }

        selection.sum = candidate_sum;
        selection.selected.push(index);
        if selection.reached(target) {
            break;
        }
    }

    Ok(selection)
}

/// Splits `list` into the entities at `selected` (in order), discarding the
/// ones at `dropped` and keeping everything else. Both index slices must be
/// ascending and disjoint.
fn apply_selection(
    list: EntityList,
    selected: &[usize],
    dropped: &[usize],
) -> (Vec<Entity>, EntityList) {
    let mut taken = Vec::with_capacity(selected.len());
    let mut remaining =
        Vec::with_capacity(list.len().saturating_sub(selected.len() + dropped.len()));

    let mut selected = selected.iter().copied().peekable();
    let mut dropped = dropped.iter().copied().peekable();

    for (index, entity) in list.into_iter().enumerate() {
        if selected.peek() == Some(&index) {
            selected.next();
            taken.push(entity);
        } else if dropped.peek() == Some(&index) {
            dropped.next();
        } else {
            remaining.push(entity);
        }
    }

    (taken, remaining)
}

/// Extracts a maximal set of disjoint groups, each summing exactly to
/// `target`, consuming the input list.
///
/// Every entity of the input ends up either inside a produced group or
/// discarded; the pass always drains the whole list. Returns
/// [`CohortError::InvalidCount`] as soon as a scanned entity has a
/// non-positive count; no partial group is emitted for that scan.
pub fn extract_groups(mut list: EntityList, target: i32) -> Result<CandidateSet> {
    // Worst case the list is all exact-target singletons.
    let mut groups = CandidateSet::with_capacity(list.len());

    while let Some(head) = list.first() {
        if head.count > target {
            trace!(name = %head.name, count = head.count, "head exceeds target, disqualified");
            list.remove(0);
            continue;
        }

        if head.count == target {
            let entity = list.remove(0);
            trace!(name = %entity.name, "head matches target, emitting singleton group");
            groups.push(Group::from_entities(vec![entity]));
            continue;
        }

        let selection = accumulate_from_head(&list, target)?;

        if selection.reached(target) {
            let (taken, remaining) = apply_selection(list, &selection.selected, &selection.dropped);
            list = remaining;
            trace!(members = taken.len(), "emitting group");
            groups.push(Group::from_entities(taken));
        } else {
            // Head is ungroupable in this pass. Accepted and skipped
            // entities stay for later scans; disqualified ones do not.
            let (_, remaining) = apply_selection(list, &[0], &selection.dropped);
            list = remaining;
        }
    }

    Ok(groups)
}
