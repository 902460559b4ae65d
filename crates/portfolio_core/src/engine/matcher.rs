//! Selection matching over item closures.
//!
//! # Responsibility
//! - Decide whether an item satisfies the current topic selection.
//!
//! # Invariants
//! - Matching is conjunctive: every selected id must be in the closure.
//! - The empty selection matches every valid item.

use crate::engine::closure::closure;
use crate::engine::graph::TopicGraph;
use crate::engine::path::{ParentPolicy, ResolveResult};
use crate::model::item::Item;
use crate::model::selection::Selection;
use crate::model::topic::TopicId;
use std::collections::BTreeSet;

/// Returns whether the item's topic closure covers the whole selection.
///
/// # Errors
/// - [`crate::engine::path::CyclicTaxonomyError`] when closure computation
///   hits a cyclic `broader` chain.
pub fn matches(
    graph: &TopicGraph,
    item: &Item,
    selection: &Selection,
    policy: ParentPolicy,
) -> ResolveResult<bool> {
    if selection.is_empty() {
        return Ok(true);
    }
    let closed = closure(graph, item, policy)?;
    Ok(covers(&closed, selection))
}

/// Set-inclusion predicate shared with callers that already hold a closure.
pub(crate) fn covers(closed: &BTreeSet<TopicId>, selection: &Selection) -> bool {
    selection.iter().all(|id| closed.contains(id))
}

#[cfg(test)]
mod tests {
    use super::matches;
    use crate::engine::graph::TopicGraph;
    use crate::engine::path::ParentPolicy;
    use crate::model::item::Item;
    use crate::model::selection::Selection;
    use crate::model::topic::Topic;
    use crate::model::viewpoint::Viewpoint;

    fn fruit_graph() -> TopicGraph {
        TopicGraph::build(&[Viewpoint::new(
            "v1",
            "Food",
            [
                Topic::root("fruit", "Fruit"),
                Topic::narrower("apple", "Apple", ["fruit"]),
            ],
        )])
    }

    fn apple_item() -> Item {
        Item {
            id: "i1".to_string(),
            name: "Apple still life".to_string(),
            thumbnail: "apple.jpg".to_string(),
            corpus: "c1".to_string(),
            topics: ["apple".to_string()].into_iter().collect(),
        }
    }

    #[test]
    fn empty_selection_matches_any_item() {
        let graph = fruit_graph();
        let matched = matches(
            &graph,
            &apple_item(),
            &Selection::empty(),
            ParentPolicy::default(),
        )
        .expect("acyclic taxonomy");
        assert!(matched);
    }

    #[test]
    fn selection_matches_through_ancestry() {
        let graph = fruit_graph();
        let matched = matches(
            &graph,
            &apple_item(),
            &Selection::from_values(["fruit"]),
            ParentPolicy::default(),
        )
        .expect("acyclic taxonomy");
        assert!(matched);
    }

    #[test]
    fn conjunction_requires_every_selected_topic() {
        let graph = fruit_graph();

        let both = Selection::from_values(["fruit", "apple"]);
        assert!(matches(&graph, &apple_item(), &both, ParentPolicy::default()).unwrap());

        let with_stranger = Selection::from_values(["fruit", "vegetable"]);
        assert!(!matches(&graph, &apple_item(), &with_stranger, ParentPolicy::default()).unwrap());
    }

    #[test]
    fn topicless_item_matches_only_the_empty_selection() {
        let graph = fruit_graph();
        let bare = Item {
            topics: Default::default(),
            ..apple_item()
        };

        assert!(matches(&graph, &bare, &Selection::empty(), ParentPolicy::default()).unwrap());
        let any = Selection::from_values(["fruit"]);
        assert!(!matches(&graph, &bare, &any, ParentPolicy::default()).unwrap());
    }
}
