//! Integration tests for tf-output.

use tf_core::EngineConfig;
use tf_sim::{Simulation, SimulationBuilder};

use crate::row::{HistorySampleRow, IncidentEventRow, SegmentSnapshotRow};
use crate::writer::OutputWriter;
use crate::OutputResult;

fn sim(seed: u64) -> Simulation {
    let mut sim = SimulationBuilder::new(EngineConfig { seed, ..EngineConfig::default() })
        .build()
        .unwrap();
    sim.start();
    sim
}

/// Keeps every row in memory.
#[derive(Default)]
struct MemoryWriter {
    snapshots: Vec<SegmentSnapshotRow>,
    incidents: Vec<IncidentEventRow>,
    history:   Vec<HistorySampleRow>,
    finishes:  usize,
}

impl OutputWriter for MemoryWriter {
    fn write_snapshots(&mut self, rows: &[SegmentSnapshotRow]) -> OutputResult<()> {
        self.snapshots.extend_from_slice(rows);
        Ok(())
    }
    fn write_incident_event(&mut self, row: &IncidentEventRow) -> OutputResult<()> {
        self.incidents.push(*row);
        Ok(())
    }
    fn write_history_sample(&mut self, row: &HistorySampleRow) -> OutputResult<()> {
        self.history.push(row.clone());
        Ok(())
    }
    fn finish(&mut self) -> OutputResult<()> {
        self.finishes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;
    use tf_incident::IncidentKind;

    use crate::csv::CsvWriter;
    use crate::row::{HistorySampleRow, IncidentEvent, IncidentEventRow, SegmentSnapshotRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(dir.path().join("segment_snapshots.csv")),
            ["unix_ms", "segment_id", "name", "intensity"]
        );
        assert_eq!(
            headers(dir.path().join("incident_events.csv")),
            ["unix_ms", "incident_id", "event", "kind", "severity", "lat", "lng", "radius_m", "clear_minutes"]
        );
        assert_eq!(
            headers(dir.path().join("history_samples.csv")),
            ["unix_ms", "time", "avg_intensity"]
        );
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("run").join("out");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("history_samples.csv").exists());
    }

    #[test]
    fn snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[
            SegmentSnapshotRow { unix_ms: 5000, segment_id: 0, name: "Atatürk Bulvarı".into(), intensity: 61.234 },
            SegmentSnapshotRow { unix_ms: 5000, segment_id: 1, name: "Eskişehir Yolu".into(), intensity: 40.0 },
        ])
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("segment_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][2], "Atatürk Bulvarı");
        assert_eq!(&rows[0][3], "61.23");
        assert_eq!(&rows[1][1], "1");
        assert_eq!(&rows[1][3], "40.00");
    }

    #[test]
    fn incident_and_history_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let spawn = IncidentEventRow {
            unix_ms:       5000,
            incident_id:   0,
            event:         IncidentEvent::Spawned,
            kind:          IncidentKind::RoadWork,
            severity:      3,
            lat:           39.9,
            lng:           32.85,
            radius_m:      900,
            clear_minutes: 120,
        };
        w.write_incident_event(&spawn).unwrap();
        w.write_incident_event(&spawn.cleared(7_205_000)).unwrap();
        w.write_history_sample(&HistorySampleRow { unix_ms: 0, time: "03:00".into(), avg_intensity: 52 })
            .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("incident_events.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][2], "spawned");
        assert_eq!(&rows[0][3], "road-work");
        assert_eq!(&rows[0][5], "39.9");
        assert_eq!(&rows[1][0], "7205000");
        assert_eq!(&rows[1][2], "cleared");
        assert_eq!(&rows[1][8], "120");

        let mut rdr = csv::Reader::from_path(dir.path().join("history_samples.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "03:00");
        assert_eq!(&rows[0][2], "52");
    }
}

#[cfg(test)]
mod observer_tests {
    use std::io;

    use tf_core::Timestamp;

    use super::{sim, MemoryWriter};
    use crate::row::{HistorySampleRow, IncidentEvent, IncidentEventRow, SegmentSnapshotRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, OutputError, OutputResult, SimOutputObserver};

    const MINUTE: u64 = 60_000;

    #[test]
    fn records_every_stream() {
        let mut s = sim(1);
        let mut obs = SimOutputObserver::new(MemoryWriter::default());
        s.run_until(Timestamp(2 * MINUTE), &mut obs);
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        // 24 ticks of 20 Ankara segments.
        assert_eq!(w.snapshots.len(), 24 * 20);
        assert_eq!(w.history.len(), 3);
        assert_eq!(w.history[2].time, "03:02");
        assert_eq!(w.incidents.len(), s.incidents().len());
        assert!(w.incidents.iter().all(|r| r.event == IncidentEvent::Spawned));
        assert_eq!(w.finishes, 1);
    }

    #[test]
    fn snapshot_interval_thins_ticks() {
        let mut s = sim(2);
        let mut obs = SimOutputObserver::new(MemoryWriter::default()).with_snapshot_interval(MINUTE);
        s.run_until(Timestamp(2 * MINUTE), &mut obs);

        let w = obs.into_writer();
        // Snapshots at 5 s and 65 s.
        assert_eq!(w.snapshots.len(), 2 * 20);
        assert_eq!(w.snapshots[0].unix_ms, 5_000);
        assert_eq!(w.snapshots[20].unix_ms, 65_000);
    }

    #[test]
    fn clear_rows_follow_spawn_rows() {
        let mut s = sim(3);
        let mut obs = SimOutputObserver::new(MemoryWriter::default()).with_snapshot_interval(u64::MAX);
        s.run_until(Timestamp(4 * 60 * MINUTE), &mut obs);

        let w = obs.into_writer();
        let cleared: Vec<_> = w.incidents.iter().filter(|r| r.event == IncidentEvent::Cleared).collect();
        assert!(!cleared.is_empty());
        for clear in cleared {
            let spawn = w
                .incidents
                .iter()
                .find(|r| r.event == IncidentEvent::Spawned && r.incident_id == clear.incident_id)
                .unwrap();
            assert_eq!(clear.unix_ms, spawn.unix_ms + spawn.clear_minutes as u64 * MINUTE);
            assert_eq!(clear.kind, spawn.kind);
        }
    }

    #[test]
    fn removed_incident_gets_a_clear_row() {
        let mut s = sim(21);
        let mut obs = SimOutputObserver::new(MemoryWriter::default()).with_snapshot_interval(u64::MAX);
        s.run_until(Timestamp(10_000), &mut obs);
        let id = s.incidents()[0].id;
        assert!(s.remove_incident(id));
        s.run_until(Timestamp(6 * 60 * MINUTE), &mut obs);

        let w = obs.into_writer();
        let rows: Vec<_> = w.incidents.iter().filter(|r| r.incident_id == id.0).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].event, IncidentEvent::Spawned);
        assert_eq!(rows[1].event, IncidentEvent::Cleared);
        assert_eq!(rows[1].unix_ms, 10_000);
    }

    #[test]
    fn reset_and_city_change_close_every_spawn_row() {
        let mut s = sim(22);
        let mut obs = SimOutputObserver::new(MemoryWriter::default()).with_snapshot_interval(u64::MAX);
        s.run_until(Timestamp(2 * MINUTE), &mut obs);
        s.select_city("istanbul");
        s.run_until(Timestamp(4 * MINUTE), &mut obs);
        s.reset();
        s.run_until(Timestamp(5 * MINUTE), &mut obs);

        let w = obs.into_writer();
        let spawned = w.incidents.iter().filter(|r| r.event == IncidentEvent::Spawned).count();
        let cleared = w.incidents.iter().filter(|r| r.event == IncidentEvent::Cleared).count();
        assert!(spawned > 0);
        assert_eq!(spawned, cleared);
        for spawn in w.incidents.iter().filter(|r| r.event == IncidentEvent::Spawned) {
            assert!(w
                .incidents
                .iter()
                .any(|r| r.event == IncidentEvent::Cleared && r.incident_id == spawn.incident_id));
        }
    }

    #[test]
    fn writes_csv_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = sim(4);
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        s.run_until(Timestamp(MINUTE), &mut obs);
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("history_samples.csv")).unwrap();
        assert_eq!(rdr.records().count(), 2);
        let mut rdr = csv::Reader::from_path(dir.path().join("segment_snapshots.csv")).unwrap();
        assert_eq!(rdr.records().count(), 12 * 20);
    }

    /// Fails every write.
    struct BrokenWriter;

    impl OutputWriter for BrokenWriter {
        fn write_snapshots(&mut self, _rows: &[SegmentSnapshotRow]) -> OutputResult<()> {
            Err(OutputError::Io(io::Error::other("disk full")))
        }
        fn write_incident_event(&mut self, _row: &IncidentEventRow) -> OutputResult<()> {
            Err(OutputError::Io(io::Error::other("second failure")))
        }
        fn write_history_sample(&mut self, _row: &HistorySampleRow) -> OutputResult<()> {
            Err(OutputError::Io(io::Error::other("first failure")))
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn keeps_first_error_only() {
        let mut s = sim(5);
        let mut obs = SimOutputObserver::new(BrokenWriter);
        s.run_until(Timestamp(MINUTE), &mut obs);

        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("first failure"), "{err}");
        assert!(obs.take_error().is_none());
    }
}
