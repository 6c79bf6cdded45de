//! Segment factory: road catalog → live segments.

use tf_core::{SegmentId, SimRng};
use tracing::{debug, warn};

use crate::catalog::{roads_for, roads_or_default, RoadDefinition};
use crate::Segment;

/// Create the live segment set for `city_key`.
///
/// Unknown keys fall back to the default city's catalog; city selection is
/// constrained upstream so this is logged rather than treated as an error.
pub fn create_segments(city_key: &str, rng: &mut SimRng) -> Vec<Segment> {
    let roads = match roads_for(city_key) {
        Some(roads) => roads,
        None => {
            warn!(city = city_key, "unknown city key, using default road catalog");
            roads_or_default(city_key)
        }
    };
    create_segments_from(roads, rng)
}

/// Create one segment per road definition, in catalog order.
///
/// `length_m` is the floored haversine distance between the endpoints and
/// the initial intensity is `base_flow * U[0.6, 1.0)`, so every segment
/// starts at or below its nominal flow.
pub fn create_segments_from(roads: &[RoadDefinition], rng: &mut SimRng) -> Vec<Segment> {
    let segments: Vec<Segment> = roads
        .iter()
        .enumerate()
        .map(|(i, road)| Segment {
            id:                SegmentId(i as u32),
            name:              road.name.clone(),
            start:             road.start,
            end:               road.end,
            base_flow:         road.base_flow,
            current_intensity: road.base_flow * rng.gen_range(0.6..1.0),
            length_m:          road.start.distance_m(road.end).floor() as u64,
        })
        .collect();
    debug!(count = segments.len(), "created segments");
    segments
}
