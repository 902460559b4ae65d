//! User topic selection model.
//!
//! # Responsibility
//! - Hold the set of topic ids the user is currently filtering by.
//!
//! # Invariants
//! - A selection is a set: duplicates collapse, order is irrelevant.
//! - The empty selection is the "show everything" default state.

use crate::model::topic::TopicId;
use std::collections::BTreeSet;

/// Conjunctive topic filter chosen by the user.
///
/// An item matches a selection when every selected id is in the item's
/// topic closure; the empty selection matches every valid item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    topics: BTreeSet<TopicId>,
}

impl Selection {
    /// Creates the empty selection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a selection from externally parsed query values.
    ///
    /// The query layer delivers zero, one, or many values under its topic
    /// key; an absent key maps to an empty iterator and thus to the empty
    /// selection.
    pub fn from_values(values: impl IntoIterator<Item = impl Into<TopicId>>) -> Self {
        Self {
            topics: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns whether no topic is selected.
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Returns the number of distinct selected topics.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Returns whether the given topic id is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.topics.contains(id)
    }

    /// Iterates selected ids in deterministic (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = &TopicId> {
        self.topics.iter()
    }
}
