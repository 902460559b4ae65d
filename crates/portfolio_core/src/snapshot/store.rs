//! Current-snapshot store with wholesale replacement.
//!
//! # Responsibility
//! - Hold the latest viewpoint and catalog snapshots between refreshes.
//!
//! # Invariants
//! - Snapshots are replaced as a whole, never mutated in place; any
//!   recomputation reads a fully consistent snapshot.
//! - A failed pull leaves the last good snapshot untouched.

use crate::model::viewpoint::Viewpoint;
use crate::snapshot::catalog::Catalog;
use log::info;

/// Holds whatever snapshots are current; the recomputation service reads
/// them as immutable inputs.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    viewpoints: Vec<Viewpoint>,
    catalog: Catalog,
}

impl SnapshotStore {
    /// Creates an empty store; both snapshots start empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the viewpoint snapshot wholesale.
    pub fn replace_viewpoints(&mut self, viewpoints: Vec<Viewpoint>) {
        info!(
            "event=viewpoints_replaced module=snapshot status=ok count={}",
            viewpoints.len()
        );
        self.viewpoints = viewpoints;
    }

    /// Replaces the catalog snapshot wholesale.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        info!(
            "event=catalog_replaced module=snapshot status=ok count={}",
            catalog.len()
        );
        self.catalog = catalog;
    }

    /// Returns the current viewpoint snapshot.
    pub fn viewpoints(&self) -> &[Viewpoint] {
        &self.viewpoints
    }

    /// Returns the current catalog snapshot.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
