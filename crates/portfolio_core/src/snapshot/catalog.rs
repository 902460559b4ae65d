//! Catalog snapshot construction.
//!
//! # Responsibility
//! - Turn raw corpus records into a validated, deterministically ordered
//!   catalog snapshot.
//! - Exclude invalid records with a diagnostic instead of failing the
//!   refresh.
//!
//! # Invariants
//! - Items are ordered by `(name, id)` so display order is stable across
//!   recomputations.
//! - An invalid record never aborts catalog construction.

use crate::model::item::{Item, ItemRecord};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Immutable catalog snapshot, replaced wholesale on each refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog from raw records, dropping invalid ones.
    ///
    /// Records missing a name or thumbnail are excluded and logged at
    /// `warn`; the rest of the pull proceeds normally.
    pub fn from_records(records: impl IntoIterator<Item = ItemRecord>) -> Self {
        let mut items = Vec::new();
        for record in records {
            match record.validate() {
                Ok(item) => items.push(item),
                Err(err) => {
                    warn!("event=item_excluded module=snapshot status=invalid reason={err}");
                }
            }
        }
        items.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Self { items }
    }

    /// Returns the validated items in display order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the total number of items in the unfiltered catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the distinct corpus ids across the whole catalog.
    pub fn corpus_ids(&self) -> BTreeSet<String> {
        self.items.iter().map(|item| item.corpus.clone()).collect()
    }
}
