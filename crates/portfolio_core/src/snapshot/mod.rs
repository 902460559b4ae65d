//! Snapshot intake and storage.
//!
//! # Responsibility
//! - Build validated catalog snapshots from raw corpus records.
//! - Hold the current snapshots between refreshes, replaced wholesale.
//!
//! # Invariants
//! - Snapshots are immutable once stored; refreshes swap, never patch.

pub mod catalog;
pub mod store;
