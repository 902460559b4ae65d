//! Viewpoint (taxonomy) snapshot model.
//!
//! # Responsibility
//! - Hold one named classification scheme: a mapping of topic id to topic.
//!
//! # Invariants
//! - A viewpoint snapshot is immutable once built; refreshes replace it
//!   wholesale instead of patching topics in place.

use crate::model::topic::{Topic, TopicId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One classification scheme under which catalog items are described.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewpoint {
    /// Opaque stable viewpoint id.
    pub id: String,
    /// Display name used to order viewpoints in the output view.
    pub name: String,
    /// Topic id to topic record, for every topic this viewpoint defines.
    #[serde(default)]
    pub topics: BTreeMap<TopicId, Topic>,
}

impl Viewpoint {
    /// Creates a viewpoint from a sequence of topics, keyed by topic id.
    ///
    /// When the same id appears twice within one viewpoint the last
    /// occurrence wins; cross-viewpoint collisions are the topic graph's
    /// concern, not this constructor's.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        topics: impl IntoIterator<Item = Topic>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            topics: topics
                .into_iter()
                .map(|topic| (topic.id.clone(), topic))
                .collect(),
        }
    }

    /// Looks up a topic defined by this viewpoint.
    pub fn topic(&self, id: &str) -> Option<&Topic> {
        self.topics.get(id)
    }

    /// Returns the number of topics this viewpoint defines.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Returns whether this viewpoint defines no topics.
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Viewpoint;
    use crate::model::topic::Topic;

    #[test]
    fn new_keys_topics_by_id() {
        let viewpoint = Viewpoint::new(
            "v1",
            "Materials",
            [Topic::root("t1", "Clay"), Topic::narrower("t2", "Terracotta", ["t1"])],
        );
        assert_eq!(viewpoint.len(), 2);
        assert_eq!(viewpoint.topic("t2").map(|t| t.name.as_str()), Some("Terracotta"));
        assert!(viewpoint.topic("t9").is_none());
    }
}
