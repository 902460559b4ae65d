//! Item domain model and wire-shape validation.
//!
//! # Responsibility
//! - Define the validated catalog entry used by the filtering engine.
//! - Validate raw catalog records before they enter a snapshot.
//!
//! # Invariants
//! - Every `Item` in a catalog has a non-blank name and thumbnail.
//! - Direct topic assignments are a set; duplicates collapse on intake.

use crate::model::topic::TopicId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a catalog item.
pub type ItemId = String;

/// Validation failure for one raw catalog record.
///
/// Invalid records are excluded from the catalog with a diagnostic; they
/// never abort a refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Record has no name, or the name is blank after trim.
    MissingName(ItemId),
    /// Record has no thumbnail reference, or it is blank after trim.
    MissingThumbnail(ItemId),
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName(id) => write!(f, "item has no name: {id}"),
            Self::MissingThumbnail(id) => write!(f, "item has no thumbnail: {id}"),
        }
    }
}

impl Error for ItemValidationError {}

/// Raw catalog record as delivered by the corpus source.
///
/// `name` and `thumbnail` are optional on the wire; validation decides
/// whether the record becomes an [`Item`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Opaque stable id, unique within the catalog.
    pub id: ItemId,
    /// Display name; absent or blank makes the record invalid.
    #[serde(default)]
    pub name: Option<String>,
    /// Thumbnail reference; absent or blank makes the record invalid.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Id of the corpus this record was pulled from.
    pub corpus: String,
    /// Directly assigned topic ids; may be empty, may repeat on the wire.
    #[serde(default)]
    pub topics: Vec<TopicId>,
}

impl ItemRecord {
    /// Validates this record into a catalog item.
    ///
    /// # Errors
    /// - [`ItemValidationError::MissingName`] when `name` is absent or blank.
    /// - [`ItemValidationError::MissingThumbnail`] when `thumbnail` is absent
    ///   or blank.
    pub fn validate(self) -> Result<Item, ItemValidationError> {
        let name = match non_blank(self.name.as_deref()) {
            Some(value) => value,
            None => return Err(ItemValidationError::MissingName(self.id)),
        };
        let thumbnail = match non_blank(self.thumbnail.as_deref()) {
            Some(value) => value,
            None => return Err(ItemValidationError::MissingThumbnail(self.id)),
        };

        Ok(Item {
            id: self.id,
            name,
            thumbnail,
            corpus: self.corpus,
            topics: self.topics.into_iter().collect(),
        })
    }
}

/// Validated catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque stable id, unique within the catalog.
    pub id: ItemId,
    /// Non-blank display name.
    pub name: String,
    /// Non-blank thumbnail reference.
    pub thumbnail: String,
    /// Id of the owning corpus.
    pub corpus: String,
    /// Directly assigned topic ids; possibly empty.
    pub topics: BTreeSet<TopicId>,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
