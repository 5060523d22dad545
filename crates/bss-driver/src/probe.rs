//! Instrumentation hook around the assignment step.

use log::debug;

use crate::segment::Snapshot;

/// Observes the storage immediately before and after the demo assigns it.
///
/// The `before_assign` snapshot is where the zero-initialization guarantee
/// becomes visible: on a first run every entity reads zero.
pub trait Probe {
    fn before_assign(&mut self, _snapshot: &Snapshot) {}

    fn after_assign(&mut self, _snapshot: &Snapshot) {}
}

/// Ignores both snapshots.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProbe;

impl Probe for NoopProbe {}

/// Logs both snapshots at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProbe;

impl Probe for LogProbe {
    fn before_assign(&mut self, snapshot: &Snapshot) {
        debug!("before assignment: {snapshot}");
    }

    fn after_assign(&mut self, snapshot: &Snapshot) {
        debug!("after assignment: {snapshot}");
    }
}
