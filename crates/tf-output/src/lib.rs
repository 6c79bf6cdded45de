//! `tf-output` — simulation output writers for the traffic forecast engine.
//!
//! | Backend | Files created                                                         |
//! |---------|-----------------------------------------------------------------------|
//! | CSV     | `segment_snapshots.csv`, `incident_events.csv`, `history_samples.csv` |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `tf_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tf_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run_until(deadline, &mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{HistorySampleRow, IncidentEvent, IncidentEventRow, SegmentSnapshotRow};
pub use writer::OutputWriter;
