//! Item topic-closure computation.
//!
//! # Responsibility
//! - Compute the full "self plus ancestors" topic set of a catalog item.
//! - Apply the configured parent policy when topics list several parents.
//!
//! # Invariants
//! - The closure is a superset of the item's direct topic ids.
//! - An item with no direct topics has the empty closure.
//! - Under `AllParents`, diamond-shaped polyhierarchies terminate without a
//!   false cycle error; genuine cycles are still reported.

use crate::engine::graph::TopicGraph;
use crate::engine::path::{resolve, CyclicTaxonomyError, ParentPolicy, ResolveResult};
use crate::model::item::Item;
use crate::model::topic::TopicId;
use std::collections::{BTreeSet, HashSet};

/// Computes the topic closure of one item.
///
/// Resolves every directly assigned topic to its ancestor set and unions
/// the results; duplicates collapse by set semantics.
///
/// # Errors
/// - [`CyclicTaxonomyError`] when any reachable `broader` chain cycles.
pub fn closure(
    graph: &TopicGraph,
    item: &Item,
    policy: ParentPolicy,
) -> ResolveResult<BTreeSet<TopicId>> {
    let mut result = BTreeSet::new();
    for topic_id in &item.topics {
        match policy {
            ParentPolicy::FirstParentOnly => {
                result.extend(resolve(graph, topic_id)?);
            }
            ParentPolicy::AllParents => {
                collect_all_ancestors(graph, topic_id, &mut result)?;
            }
        }
    }
    Ok(result)
}

/// Depth-first walk over every `broader` edge reachable from `id`.
///
/// `on_stack` tracks the active chain so a back edge is reported as a
/// cycle, while ids already in `result` are skipped so a diamond (two
/// parents sharing an ancestor) is visited once and terminates.
fn collect_all_ancestors(
    graph: &TopicGraph,
    id: &TopicId,
    result: &mut BTreeSet<TopicId>,
) -> ResolveResult<()> {
    let mut on_stack = HashSet::new();
    walk(graph, id, id, &mut on_stack, result)
}

fn walk(
    graph: &TopicGraph,
    origin: &TopicId,
    current: &TopicId,
    on_stack: &mut HashSet<TopicId>,
    result: &mut BTreeSet<TopicId>,
) -> ResolveResult<()> {
    if on_stack.contains(current) {
        let mut cycle: Vec<TopicId> = on_stack.iter().cloned().collect();
        cycle.sort();
        cycle.push(current.clone());
        return Err(CyclicTaxonomyError {
            topic_id: origin.clone(),
            cycle,
        });
    }
    if result.contains(current) {
        // Already fully expanded via another parent; a diamond, not a cycle.
        return Ok(());
    }

    on_stack.insert(current.clone());
    if let Some(topic) = graph.lookup(current) {
        for parent in &topic.broader {
            walk(graph, origin, parent, on_stack, result)?;
        }
    }
    on_stack.remove(current);

    result.insert(current.clone());
    Ok(())
}
