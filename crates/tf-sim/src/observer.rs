//! Simulation observer trait for progress reporting and data collection.

use tf_core::{IncidentId, SegmentId, Timestamp};
use tf_forecast::HistoricalDataPoint;
use tf_incident::Incident;
use tf_network::Segment;

/// Callbacks invoked by [`Simulation::run_until`][crate::Simulation::run_until]
/// as events are handled.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example
///
/// ```rust,ignore
/// struct IncidentPrinter;
///
/// impl SimObserver for IncidentPrinter {
///     fn on_incident_spawned(&mut self, incident: &Incident, affected: &[SegmentId]) {
///         println!("{} ({} segments affected)", incident.description, affected.len());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after each intensity update has been committed.
    fn on_tick_end(&mut self, _now: Timestamp, _segments: &[Segment]) {}

    /// Called after an incident has been added to the active set.
    ///
    /// `affected` lists the segments whose midpoints lie inside the
    /// incident's radius at spawn time, in ascending id order.
    fn on_incident_spawned(&mut self, _incident: &Incident, _affected: &[SegmentId]) {}

    /// Called when an incident leaves the active set.
    ///
    /// Expiries are reported as they fire.  Explicit removals and the
    /// incidents dropped by a city change or reset are reported at the start
    /// of the next `run_until`, with `now` set to the time of removal.
    fn on_incident_cleared(&mut self, _id: IncidentId, _now: Timestamp) {}

    /// Called after a history point has been appended.
    fn on_history_sample(&mut self, _now: Timestamp, _point: &HistoricalDataPoint) {}

    /// Called once when `run_until` reaches its deadline.
    fn on_run_end(&mut self, _now: Timestamp) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
