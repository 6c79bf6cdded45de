//! Spatial index over segment midpoints.
//!
//! An R-tree (via `rstar`) maps `(lat, lng)` to segments.  Incident impact
//! is measured from a segment's midpoint, so the index stores midpoints
//! only.  Radius queries prefilter with a degree-space envelope and then
//! confirm with the exact haversine distance.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use tf_core::{GeoPoint, SegmentId};

use crate::Segment;

/// Metres per degree of latitude (and of longitude at the equator).
const METRES_PER_DEGREE: f64 = 111_320.0;

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct MidpointEntry {
    point: [f64; 2], // [lat, lng]
    id: SegmentId,
}

impl RTreeObject for MidpointEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for MidpointEntry {
    /// Squared Euclidean distance in lat/lng space.  Good enough for
    /// nearest-segment queries within a city.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlng = self.point[1] - point[1];
        dlat * dlat + dlng * dlng
    }
}

// ── SegmentIndex ──────────────────────────────────────────────────────────────

/// Immutable spatial index over one segment set.
///
/// Segment geometry never changes between ticks, so an index built at city
/// selection stays valid until the next city change or reset.
pub struct SegmentIndex {
    tree: RTree<MidpointEntry>,
}

impl SegmentIndex {
    /// Bulk-load the index from a segment set.
    pub fn build(segments: &[Segment]) -> Self {
        let entries: Vec<MidpointEntry> = segments
            .iter()
            .map(|s| {
                let m = s.midpoint();
                MidpointEntry { point: [m.lat, m.lng], id: s.id }
            })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// The segment whose midpoint is nearest to `pos`.
    ///
    /// Returns `None` only if the index is empty.
    pub fn nearest(&self, pos: GeoPoint) -> Option<SegmentId> {
        self.tree.nearest_neighbor(&[pos.lat, pos.lng]).map(|e| e.id)
    }

    /// Segments whose midpoint lies within `radius_m` metres of `pos`,
    /// sorted by id.
    pub fn within_radius(&self, pos: GeoPoint, radius_m: f64) -> Vec<SegmentId> {
        // Pad the envelope slightly so degree-space rounding never drops a
        // segment the exact check would keep.
        let half_lat = radius_m / METRES_PER_DEGREE * 1.05;
        let cos_lat = pos.lat.to_radians().cos().abs().max(1e-6);
        let half_lng = half_lat / cos_lat;
        let envelope = AABB::from_corners(
            [pos.lat - half_lat, pos.lng - half_lng],
            [pos.lat + half_lat, pos.lng + half_lng],
        );
        let mut ids: Vec<SegmentId> = self
            .tree
            .locate_in_envelope(&envelope)
            .filter(|e| GeoPoint::new(e.point[0], e.point[1]).distance_m(pos) <= radius_m)
            .map(|e| e.id)
            .collect();
        ids.sort_unstable();
        ids
    }
}
