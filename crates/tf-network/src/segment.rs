//! Live road segments.

use std::borrow::Cow;

use tf_core::{GeoPoint, SegmentId};

/// A modeled stretch of road with a current congestion value.
///
/// Segments are created in one batch per city selection or reset and are
/// replaced wholesale on every update tick; `base_flow`, the endpoints and
/// `length_m` never change after creation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub id:                SegmentId,
    pub name:              Cow<'static, str>,
    pub start:             GeoPoint,
    pub end:               GeoPoint,
    /// Nominal congestion under normal conditions, 0–100.
    pub base_flow:         f64,
    /// Current congestion, 0–100 after every update.
    pub current_intensity: f64,
    /// Floored great-circle length in metres.
    pub length_m:          u64,
}

impl Segment {
    /// Average of the two endpoints; the reference point for incident impact.
    #[inline]
    pub fn midpoint(&self) -> GeoPoint {
        self.start.midpoint(self.end)
    }

    /// A copy of this segment carrying a new intensity.
    #[inline]
    pub fn with_intensity(&self, current_intensity: f64) -> Segment {
        Segment { current_intensity, ..self.clone() }
    }
}

/// Arithmetic mean of `current_intensity`; `0.0` for an empty slice.
pub fn average_intensity(segments: &[Segment]) -> f64 {
    if segments.is_empty() {
        return 0.0;
    }
    segments.iter().map(|s| s.current_intensity).sum::<f64>() / segments.len() as f64
}
