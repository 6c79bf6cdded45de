//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `segment_snapshots.csv`
//! - `incident_events.csv`
//! - `history_samples.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{HistorySampleRow, IncidentEventRow, OutputResult, SegmentSnapshotRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    incidents: Writer<File>,
    history:   Writer<File>,
}

impl CsvWriter {
    /// Create the output directory if needed, open the three CSV files, and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("segment_snapshots.csv"))?;
        snapshots.write_record(["unix_ms", "segment_id", "name", "intensity"])?;

        let mut incidents = Writer::from_path(dir.join("incident_events.csv"))?;
        incidents.write_record([
            "unix_ms", "incident_id", "event", "kind", "severity", "lat", "lng", "radius_m", "clear_minutes",
        ])?;

        let mut history = Writer::from_path(dir.join("history_samples.csv"))?;
        history.write_record(["unix_ms", "time", "avg_intensity"])?;

        Ok(Self {
            snapshots,
            incidents,
            history,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[SegmentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.unix_ms.to_string(),
                row.segment_id.to_string(),
                row.name.clone(),
                format!("{:.2}", row.intensity),
            ])?;
        }
        Ok(())
    }

    fn write_incident_event(&mut self, row: &IncidentEventRow) -> OutputResult<()> {
        self.incidents.write_record(&[
            row.unix_ms.to_string(),
            row.incident_id.to_string(),
            row.event.to_string(),
            row.kind.to_string(),
            row.severity.to_string(),
            row.lat.to_string(),
            row.lng.to_string(),
            row.radius_m.to_string(),
            row.clear_minutes.to_string(),
        ])?;
        Ok(())
    }

    fn write_history_sample(&mut self, row: &HistorySampleRow) -> OutputResult<()> {
        self.history.write_record(&[
            row.unix_ms.to_string(),
            row.time.clone(),
            row.avg_intensity.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.snapshots.flush()?;
        self.incidents.flush()?;
        self.history.flush()?;
        Ok(())
    }
}
