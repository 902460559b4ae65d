//! Domain model for topics, viewpoints, items, and selections.
//!
//! # Responsibility
//! - Define the snapshot data structures consumed by the filtering engine.
//! - Validate raw catalog records at the snapshot boundary.
//!
//! # Invariants
//! - Ids are opaque strings; the engine never parses them.
//! - Snapshot types are immutable after construction.

pub mod item;
pub mod selection;
pub mod topic;
pub mod viewpoint;
