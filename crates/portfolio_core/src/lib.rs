//! Core domain logic for the portfolio faceted-navigation engine.
//! This crate is the single source of truth for topic-hierarchy semantics.

pub mod config;
pub mod engine;
pub mod logging;
pub mod model;
pub mod service;
pub mod snapshot;
pub mod source;

pub use config::{ConfigError, PortfolioConfig};
pub use engine::closure::closure;
pub use engine::graph::TopicGraph;
pub use engine::index::InvertedIndex;
pub use engine::matcher::matches;
pub use engine::path::{resolve, CyclicTaxonomyError, ParentPolicy, ResolveResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{Item, ItemId, ItemRecord, ItemValidationError};
pub use model::selection::Selection;
pub use model::topic::{Topic, TopicId};
pub use model::viewpoint::Viewpoint;
pub use service::portfolio::{PortfolioService, PortfolioView};
pub use snapshot::catalog::Catalog;
pub use snapshot::store::SnapshotStore;
pub use source::refresh::{RefreshGate, RefreshOutcome, RefreshStream, Refresher};
pub use source::{PortfolioSource, SourceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
