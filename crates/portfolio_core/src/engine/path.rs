//! Ancestor path resolution over the topic graph.
//!
//! # Responsibility
//! - Resolve a topic id to its canonical ancestor chain, root-most first.
//! - Guard resolution against cyclic `broader` links.
//!
//! # Invariants
//! - The resolved path always ends with the queried id and has length >= 1.
//! - Unknown ids resolve to a singleton path, never an error.
//! - A cycle in `broader` links yields `CyclicTaxonomyError`, never
//!   unbounded recursion.

use crate::engine::graph::TopicGraph;
use crate::model::topic::TopicId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Ancestry traversal policy for multi-parent topics.
///
/// The upstream data model allows a topic to list several parents; which
/// of them contribute ancestors is an explicit policy, not an accident of
/// traversal order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentPolicy {
    /// Follow only the first listed parent; alternate parents are ignored.
    /// This mirrors the historical behavior of the system and keeps one
    /// canonical path per topic.
    #[default]
    FirstParentOnly,
    /// Union ancestors across every listed parent, honoring the full
    /// polyhierarchy.
    AllParents,
}

/// Cyclic `broader` chain detected during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclicTaxonomyError {
    /// The id whose resolution was requested.
    pub topic_id: TopicId,
    /// Ids on the cycle, in the order they were visited.
    pub cycle: Vec<TopicId>,
}

impl Display for CyclicTaxonomyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cyclic broader chain while resolving topic {}: {}",
            self.topic_id,
            self.cycle.join(" -> ")
        )
    }
}

impl Error for CyclicTaxonomyError {}

pub type ResolveResult<T> = Result<T, CyclicTaxonomyError>;

/// Resolves the canonical ancestor path of a topic, root-most first.
///
/// Follows only the first listed parent of each topic. An id the graph
/// does not know is treated as an unlabeled leaf and resolves to `[id]`.
///
/// # Errors
/// - [`CyclicTaxonomyError`] when the first-parent chain revisits an id.
pub fn resolve(graph: &TopicGraph, id: &str) -> ResolveResult<Vec<TopicId>> {
    let mut path = Vec::new();
    let mut visited = HashSet::new();
    let mut cursor = id.to_string();

    loop {
        if !visited.insert(cursor.clone()) {
            path.push(cursor);
            return Err(CyclicTaxonomyError {
                topic_id: id.to_string(),
                cycle: path,
            });
        }
        path.push(cursor.clone());

        match graph.lookup(&cursor).and_then(|topic| topic.first_parent()) {
            Some(parent) => cursor = parent.clone(),
            None => break,
        }
    }

    path.reverse();
    Ok(path)
}
