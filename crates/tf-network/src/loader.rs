//! CSV road catalog loader.
//!
//! # CSV format
//!
//! One row per road:
//!
//! ```csv
//! name,start_lat,start_lng,end_lat,end_lng,base_flow
//! Atatürk Bulvarı,39.9208,32.8541,39.9334,32.8597,75
//! Eskişehir Yolu,39.9334,32.8597,39.9500,32.7800,70
//! ```
//!
//! `base_flow` must lie in `[0, 100]` and coordinates must be finite and in
//! WGS-84 range; anything else is a parse error naming the offending row.

use std::borrow::Cow;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tf_core::{GeoPoint, TfError, TfResult};

use crate::catalog::RoadDefinition;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RoadRecord {
    name:      String,
    start_lat: f64,
    start_lng: f64,
    end_lat:   f64,
    end_lng:   f64,
    base_flow: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a road catalog from a CSV file.
pub fn load_roads_csv(path: &Path) -> TfResult<Vec<RoadDefinition>> {
    let file = std::fs::File::open(path)?;
    load_roads_reader(file)
}

/// Like [`load_roads_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded catalogs.
pub fn load_roads_reader<R: Read>(reader: R) -> TfResult<Vec<RoadDefinition>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut roads = Vec::new();

    for (row, result) in csv_reader.deserialize::<RoadRecord>().enumerate() {
        let rec = result.map_err(|e| TfError::Parse(e.to_string()))?;
        roads.push(validate(row + 1, rec)?);
    }

    Ok(roads)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn validate(row: usize, rec: RoadRecord) -> TfResult<RoadDefinition> {
    if !(0.0..=100.0).contains(&rec.base_flow) {
        return Err(TfError::Parse(format!(
            "row {row} ({}): base_flow {} outside 0..=100",
            rec.name, rec.base_flow
        )));
    }
    let start = parse_point(row, rec.start_lat, rec.start_lng)?;
    let end = parse_point(row, rec.end_lat, rec.end_lng)?;
    Ok(RoadDefinition {
        name: Cow::Owned(rec.name),
        start,
        end,
        base_flow: rec.base_flow,
    })
}

fn parse_point(row: usize, lat: f64, lng: f64) -> TfResult<GeoPoint> {
    if !lat.is_finite() || !lng.is_finite() || lat.abs() > 90.0 || lng.abs() > 180.0 {
        return Err(TfError::Parse(format!(
            "row {row}: invalid coordinate ({lat}, {lng})"
        )));
    }
    Ok(GeoPoint::new(lat, lng))
}
