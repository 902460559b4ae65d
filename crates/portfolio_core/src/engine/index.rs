//! Inverted topic-to-items index over matched items.
//!
//! # Responsibility
//! - Aggregate, per topic, which currently matched items fall under it.
//!
//! # Invariants
//! - Only items that already passed the selection match appear.
//! - An item id appears at most once under a topic, regardless of how many
//!   of its direct topics share that ancestor.

use crate::engine::closure::closure;
use crate::engine::graph::TopicGraph;
use crate::engine::path::{ParentPolicy, ResolveResult};
use crate::model::item::{Item, ItemId};
use crate::model::topic::TopicId;
use std::collections::{BTreeMap, BTreeSet};

/// Topic id to matched-item ids, used for faceted counts in topic trees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    entries: BTreeMap<TopicId, BTreeSet<ItemId>>,
}

impl InvertedIndex {
    /// Builds the index from the items matched by the current selection.
    ///
    /// Every id in an item's closure receives that item, so a topic's
    /// count covers items tagged directly or through any descendant.
    ///
    /// # Errors
    /// - [`crate::engine::path::CyclicTaxonomyError`] when closure
    ///   computation hits a cyclic `broader` chain.
    pub fn build(
        graph: &TopicGraph,
        matched: &[Item],
        policy: ParentPolicy,
    ) -> ResolveResult<Self> {
        let mut entries: BTreeMap<TopicId, BTreeSet<ItemId>> = BTreeMap::new();
        for item in matched {
            for topic_id in closure(graph, item, policy)? {
                entries.entry(topic_id).or_default().insert(item.id.clone());
            }
        }
        Ok(Self { entries })
    }

    /// Returns the matched items under a topic, if any.
    pub fn items_under(&self, topic_id: &str) -> Option<&BTreeSet<ItemId>> {
        self.entries.get(topic_id)
    }

    /// Returns how many matched items fall under a topic.
    pub fn count_under(&self, topic_id: &str) -> usize {
        self.items_under(topic_id).map_or(0, BTreeSet::len)
    }

    /// Returns the number of topics with at least one matched item.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no topic has a matched item.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(topic id, matched item ids)` in sorted topic order.
    pub fn iter(&self) -> impl Iterator<Item = (&TopicId, &BTreeSet<ItemId>)> {
        self.entries.iter()
    }
}
