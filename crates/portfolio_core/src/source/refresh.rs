//! Single-flight refresh driver for the two snapshot streams.
//!
//! # Responsibility
//! - Guarantee at most one outstanding pull per stream, coalescing timer
//!   ticks that arrive while a pull is still in flight.
//! - Replace the matching snapshot on success; keep the last good one on
//!   failure.
//!
//! # Invariants
//! - The viewpoint and catalog streams are independent: one being in
//!   flight never blocks the other.
//! - A pull failure is logged and reported, never escalated to a panic.

use crate::snapshot::catalog::Catalog;
use crate::snapshot::store::SnapshotStore;
use crate::source::PortfolioSource;
use log::{info, warn};
use std::sync::atomic::{AtomicBool, Ordering};

/// The two independently polled snapshot streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStream {
    Viewpoints,
    Catalog,
}

impl RefreshStream {
    fn label(self) -> &'static str {
        match self {
            Self::Viewpoints => "viewpoints",
            Self::Catalog => "catalog",
        }
    }
}

/// Per-stream single-flight guard.
///
/// `begin` hands out at most one [`RefreshPermit`] per stream at a time;
/// dropping the permit releases the stream for the next tick.
#[derive(Debug, Default)]
pub struct RefreshGate {
    viewpoints_in_flight: AtomicBool,
    catalog_in_flight: AtomicBool,
}

impl RefreshGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the stream for one pull, or `None` when a pull is still
    /// outstanding and this tick should be skipped.
    pub fn begin(&self, stream: RefreshStream) -> Option<RefreshPermit<'_>> {
        let flag = self.flag(stream);
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RefreshPermit { flag })
    }

    /// Returns whether a pull for the stream is currently outstanding.
    pub fn is_in_flight(&self, stream: RefreshStream) -> bool {
        self.flag(stream).load(Ordering::Acquire)
    }

    fn flag(&self, stream: RefreshStream) -> &AtomicBool {
        match stream {
            RefreshStream::Viewpoints => &self.viewpoints_in_flight,
            RefreshStream::Catalog => &self.catalog_in_flight,
        }
    }
}

/// Exclusive claim on one stream for the duration of a pull.
#[derive(Debug)]
pub struct RefreshPermit<'gate> {
    flag: &'gate AtomicBool,
}

impl Drop for RefreshPermit<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Outcome of one refresh tick for one stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The snapshot was replaced with a fresh pull.
    Replaced,
    /// A previous pull for this stream was still in flight; tick coalesced.
    SkippedInFlight,
    /// The pull failed; the last good snapshot stays in effect.
    KeptLastGood,
}

/// Drives snapshot pulls from a source into the store, one per stream.
pub struct Refresher<S: PortfolioSource> {
    source: S,
    gate: RefreshGate,
}

impl<S: PortfolioSource> Refresher<S> {
    /// Creates a refresher over one source adapter.
    pub fn new(source: S) -> Self {
        Self {
            source,
            gate: RefreshGate::new(),
        }
    }

    /// Runs one tick for the given stream.
    pub fn tick(&self, stream: RefreshStream, store: &mut SnapshotStore) -> RefreshOutcome {
        let Some(_permit) = self.gate.begin(stream) else {
            info!(
                "event=refresh_skipped module=source stream={} status=in_flight",
                stream.label()
            );
            return RefreshOutcome::SkippedInFlight;
        };

        let result = match stream {
            RefreshStream::Viewpoints => self
                .source
                .fetch_viewpoints()
                .map(|viewpoints| store.replace_viewpoints(viewpoints)),
            RefreshStream::Catalog => self
                .source
                .fetch_catalog()
                .map(|records| store.replace_catalog(Catalog::from_records(records))),
        };

        match result {
            Ok(()) => RefreshOutcome::Replaced,
            Err(err) => {
                warn!(
                    "event=refresh_failed module=source stream={} status=kept_last_good reason={}",
                    stream.label(),
                    err
                );
                RefreshOutcome::KeptLastGood
            }
        }
    }

    /// Exposes the gate so an external scheduler can probe stream state.
    pub fn gate(&self) -> &RefreshGate {
        &self.gate
    }
}

#[cfg(test)]
mod tests {
    use super::{RefreshGate, RefreshStream};

    #[test]
    fn gate_refuses_second_permit_while_first_is_live() {
        let gate = RefreshGate::new();

        let permit = gate.begin(RefreshStream::Catalog);
        assert!(permit.is_some());
        assert!(gate.begin(RefreshStream::Catalog).is_none());
        assert!(gate.is_in_flight(RefreshStream::Catalog));

        drop(permit);
        assert!(!gate.is_in_flight(RefreshStream::Catalog));
        assert!(gate.begin(RefreshStream::Catalog).is_some());
    }

    #[test]
    fn streams_are_gated_independently() {
        let gate = RefreshGate::new();

        let _viewpoints = gate.begin(RefreshStream::Viewpoints);
        assert!(gate.begin(RefreshStream::Catalog).is_some());
    }
}
