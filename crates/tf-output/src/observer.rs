//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use std::collections::HashMap;

use tf_core::{IncidentId, SegmentId, Timestamp};
use tf_forecast::HistoricalDataPoint;
use tf_incident::Incident;
use tf_network::Segment;
use tf_sim::SimObserver;

use crate::row::{HistorySampleRow, IncidentEventRow, SegmentSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes segment snapshots, incident events, and
/// history samples to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `run_until` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:               W,
    /// Minimum spacing between segment snapshots; 0 writes every tick.
    snapshot_interval_ms: u64,
    last_snapshot:        Option<Timestamp>,
    /// Spawn rows of incidents that have not cleared yet.
    open:                 HashMap<IncidentId, IncidentEventRow>,
    last_error:           Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer` that snapshots every tick.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            snapshot_interval_ms: 0,
            last_snapshot:        None,
            open:                 HashMap::new(),
            last_error:           None,
        }
    }

    /// Write segment snapshots at most once per `interval_ms`.
    pub fn with_snapshot_interval(mut self, interval_ms: u64) -> Self {
        self.snapshot_interval_ms = interval_ms;
        self
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn snapshot_due(&self, now: Timestamp) -> bool {
        match self.last_snapshot {
            None => true,
            Some(last) => now.since(last) >= self.snapshot_interval_ms,
        }
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, now: Timestamp, segments: &[Segment]) {
        if !self.snapshot_due(now) {
            return;
        }
        self.last_snapshot = Some(now);
        let rows: Vec<SegmentSnapshotRow> = segments
            .iter()
            .map(|s| SegmentSnapshotRow {
                unix_ms:    now.0,
                segment_id: s.id.0,
                name:       s.name.to_string(),
                intensity:  s.current_intensity,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_incident_spawned(&mut self, incident: &Incident, _affected: &[SegmentId]) {
        let row = IncidentEventRow::spawned(incident);
        self.open.insert(incident.id, row);
        let result = self.writer.write_incident_event(&row);
        self.store_err(result);
    }

    fn on_incident_cleared(&mut self, id: IncidentId, now: Timestamp) {
        // Incidents spawned before this observer was attached have no row.
        if let Some(row) = self.open.remove(&id) {
            let result = self.writer.write_incident_event(&row.cleared(now.0));
            self.store_err(result);
        }
    }

    fn on_history_sample(&mut self, now: Timestamp, point: &HistoricalDataPoint) {
        let row = HistorySampleRow {
            unix_ms:       now.0,
            time:          point.time.clone(),
            avg_intensity: point.avg_intensity,
        };
        let result = self.writer.write_history_sample(&row);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _now: Timestamp) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
