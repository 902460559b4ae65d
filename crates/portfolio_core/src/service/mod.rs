//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate the engine modules into one recomputation API.
//! - Keep display/transport layers decoupled from engine details.

pub mod portfolio;
