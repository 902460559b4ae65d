//! Topic graph aggregated across viewpoint snapshots.
//!
//! # Responsibility
//! - Index topic id to topic record over an ordered sequence of viewpoints.
//! - Make the cross-viewpoint merge policy explicit and observable.
//!
//! # Invariants
//! - First-seen-wins: a topic id defined by an earlier viewpoint is never
//!   replaced by a later one; viewpoints are not merged.
//! - The graph is immutable after `build`.

use crate::model::topic::{Topic, TopicId};
use crate::model::viewpoint::Viewpoint;
use log::debug;
use std::collections::BTreeMap;

/// Read-only topic index built once per recomputation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicGraph {
    topics: BTreeMap<TopicId, Topic>,
    shadowed: usize,
}

impl TopicGraph {
    /// Builds the graph by scanning viewpoints in the given order.
    ///
    /// A topic id already inserted by an earlier viewpoint shadows any
    /// later definition; each shadowed occurrence is counted and logged so
    /// the policy stays visible in diagnostics.
    pub fn build(viewpoints: &[Viewpoint]) -> Self {
        let mut topics = BTreeMap::new();
        let mut shadowed = 0;

        for viewpoint in viewpoints {
            for (id, topic) in &viewpoint.topics {
                if topics.contains_key(id) {
                    shadowed += 1;
                    debug!(
                        "event=topic_shadowed module=engine topic_id={} viewpoint_id={}",
                        id, viewpoint.id
                    );
                    continue;
                }
                topics.insert(id.clone(), topic.clone());
            }
        }

        Self { topics, shadowed }
    }

    /// Looks up a topic by id; absent ids are not an error.
    pub fn lookup(&self, id: &str) -> Option<&Topic> {
        self.topics.get(id)
    }

    /// Returns the display name of a topic, when known.
    pub fn topic_name(&self, id: &str) -> Option<&str> {
        self.lookup(id).map(|topic| topic.name.as_str())
    }

    /// Returns the number of distinct topic ids indexed.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Returns whether no topics are indexed.
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Returns how many topic definitions were shadowed during build.
    pub fn shadowed_count(&self) -> usize {
        self.shadowed
    }
}
