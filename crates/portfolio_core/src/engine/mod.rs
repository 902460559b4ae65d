//! Topic-hierarchy resolution and filtering engine.
//!
//! # Responsibility
//! - Build the topic graph, resolve ancestry, compute closures, match the
//!   selection, and aggregate the inverted index.
//!
//! # Invariants
//! - Every operation is a pure function of its snapshot inputs; nothing in
//!   this module holds state between invocations.

pub mod closure;
pub mod graph;
pub mod index;
pub mod matcher;
pub mod path;
