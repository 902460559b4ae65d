//! Topic domain model.
//!
//! # Responsibility
//! - Define the canonical topic record aggregated from viewpoint snapshots.
//!
//! # Invariants
//! - `id` is opaque; the engine never interprets its contents.
//! - `broader` preserves source order: the first entry is the canonical
//!   parent under `ParentPolicy::FirstParentOnly`.

use serde::{Deserialize, Serialize};

/// Stable identifier for a topic within a viewpoint.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TopicId = String;

/// One node of a polyhierarchical classification taxonomy.
///
/// A topic with an empty `broader` list is a root. A topic may list more
/// than one parent; which parents are consulted during ancestry resolution
/// is decided by the resolver policy, not by this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Opaque stable id, unique within its owning viewpoint.
    pub id: TopicId,
    /// Display label shown in status lines and topic trees.
    pub name: String,
    /// Ordered parent topic ids; empty means root.
    #[serde(default)]
    pub broader: Vec<TopicId>,
}

impl Topic {
    /// Creates a root topic with no parents.
    pub fn root(id: impl Into<TopicId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            broader: Vec::new(),
        }
    }

    /// Creates a topic under the given parents, source order preserved.
    pub fn narrower(
        id: impl Into<TopicId>,
        name: impl Into<String>,
        broader: impl IntoIterator<Item = impl Into<TopicId>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            broader: broader.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns whether this topic has no parents.
    pub fn is_root(&self) -> bool {
        self.broader.is_empty()
    }

    /// Returns the canonical first-listed parent, if any.
    pub fn first_parent(&self) -> Option<&TopicId> {
        self.broader.first()
    }
}
