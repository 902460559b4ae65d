//! External data-source boundary.
//!
//! # Responsibility
//! - Define the contract an external knowledge-organization adapter
//!   implements to deliver viewpoint and catalog snapshots.
//!
//! # Invariants
//! - The core never talks to the network itself; it only consumes whatever
//!   snapshots an adapter hands over.
//! - A failed pull is reported, never panicked on; the core keeps its last
//!   good snapshot.

pub mod refresh;

use crate::model::item::ItemRecord;
use crate::model::viewpoint::Viewpoint;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure reported by a snapshot pull.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The remote service could not be reached or answered with a failure.
    Unavailable(String),
    /// The service answered, but the payload did not parse into snapshots.
    Malformed(String),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(details) => write!(f, "source unavailable: {details}"),
            Self::Malformed(details) => write!(f, "source payload malformed: {details}"),
        }
    }
}

impl Error for SourceError {}

/// Adapter contract for pulling portfolio snapshots.
///
/// Implementations live outside the core (HTTP clients, fixtures); the
/// refresh layer drives them one pull at a time per stream.
pub trait PortfolioSource {
    /// Pulls the full viewpoint snapshot.
    fn fetch_viewpoints(&self) -> Result<Vec<Viewpoint>, SourceError>;

    /// Pulls the full raw catalog; records are validated on intake.
    fn fetch_catalog(&self) -> Result<Vec<ItemRecord>, SourceError>;
}
