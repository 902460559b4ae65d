//! Portfolio recomputation use-case service.
//!
//! # Responsibility
//! - Run one full recomputation over the current snapshots: graph build,
//!   closure computation, selection matching, inverted-index aggregation.
//! - Shape the result for the display collaborator.
//!
//! # Invariants
//! - `recompute` is a pure function of its snapshot inputs; identical
//!   inputs yield an identical view.
//! - The returned item list preserves catalog (name) order.

use crate::config::PortfolioConfig;
use crate::engine::closure::closure;
use crate::engine::graph::TopicGraph;
use crate::engine::index::InvertedIndex;
use crate::engine::matcher::covers;
use crate::engine::path::ResolveResult;
use crate::model::item::Item;
use crate::model::selection::Selection;
use crate::model::viewpoint::Viewpoint;
use crate::snapshot::catalog::Catalog;
use log::info;
use std::collections::BTreeSet;

/// Everything the display layer needs after one recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioView {
    /// Human-readable join of the selected topic names, or the all-items
    /// label when the selection is empty.
    pub status: String,
    /// Viewpoints sorted by display name, for rendering topic trees.
    pub viewpoints: Vec<Viewpoint>,
    /// The selection the view was computed for.
    pub selection: Selection,
    /// Topic id to matched item ids, for per-topic facet counts.
    pub index: InvertedIndex,
    /// Items matched by the selection, in catalog display order.
    pub items: Vec<Item>,
    /// Distinct corpus ids across the whole (unfiltered) catalog.
    pub corpus_ids: BTreeSet<String>,
    /// Total unfiltered catalog size, for "N of M" summaries.
    pub total_items: usize,
}

/// Stateless facade over the filtering engine.
pub struct PortfolioService {
    config: PortfolioConfig,
}

impl PortfolioService {
    /// Creates a service with the given configuration.
    pub fn new(config: PortfolioConfig) -> Self {
        Self { config }
    }

    /// Creates a service with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(PortfolioConfig::default())
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &PortfolioConfig {
        &self.config
    }

    /// Runs one recomputation over the given snapshots.
    ///
    /// # Errors
    /// - [`crate::engine::path::CyclicTaxonomyError`] when any reachable
    ///   `broader` chain cycles.
    pub fn recompute(
        &self,
        viewpoints: &[Viewpoint],
        catalog: &Catalog,
        selection: &Selection,
    ) -> ResolveResult<PortfolioView> {
        let graph = TopicGraph::build(viewpoints);
        let policy = self.config.parent_policy;

        let mut items = Vec::new();
        for item in catalog.items() {
            let closed = closure(&graph, item, policy)?;
            if covers(&closed, selection) {
                items.push(item.clone());
            }
        }

        let index = InvertedIndex::build(&graph, &items, policy)?;

        let mut sorted_viewpoints = viewpoints.to_vec();
        sorted_viewpoints.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

        info!(
            "event=recompute module=service status=ok selected={} matched={} total={}",
            selection.len(),
            items.len(),
            catalog.len()
        );

        Ok(PortfolioView {
            status: self.status_label(&graph, selection),
            viewpoints: sorted_viewpoints,
            selection: selection.clone(),
            index,
            items,
            corpus_ids: catalog.corpus_ids(),
            total_items: catalog.len(),
        })
    }

    /// Joins the selected topic names into the status label.
    ///
    /// Unknown ids render with the configured placeholder; the empty
    /// selection renders as the all-items label.
    fn status_label(&self, graph: &TopicGraph, selection: &Selection) -> String {
        if selection.is_empty() {
            return self.config.all_items_label.clone();
        }
        selection
            .iter()
            .map(|id| {
                graph
                    .topic_name(id)
                    .unwrap_or(self.config.unknown_topic_label.as_str())
            })
            .collect::<Vec<_>>()
            .join(" + ")
    }
}
