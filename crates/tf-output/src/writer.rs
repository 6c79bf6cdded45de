//! The `OutputWriter` trait implemented by backend writers.

use crate::{HistorySampleRow, IncidentEventRow, OutputResult, SegmentSnapshotRow};

/// Sink for the three output streams.
///
/// Errors are stored by [`SimOutputObserver`][crate::SimOutputObserver] and
/// retrieved with `take_error`, since observer hooks cannot fail.
pub trait OutputWriter {
    /// Write one tick's segment intensities.
    fn write_snapshots(&mut self, rows: &[SegmentSnapshotRow]) -> OutputResult<()>;

    /// Write one incident spawn or clear event.
    fn write_incident_event(&mut self, row: &IncidentEventRow) -> OutputResult<()>;

    /// Write one rolling-history sample.
    fn write_history_sample(&mut self, row: &HistorySampleRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Called at the end of every `run_until`, so writers must accept further
    /// rows afterwards.
    fn finish(&mut self) -> OutputResult<()>;
}
