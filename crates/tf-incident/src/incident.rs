//! The `Incident` record.

use std::borrow::Cow;

use tf_core::{GeoPoint, IncidentId, SegmentId, Timestamp};

use crate::IncidentKind;

/// A transient disruption with a spatial radius and a bounded lifetime.
///
/// Incidents are never mutated after creation; they are only removed from
/// the active set, either explicitly or once they expire.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Incident {
    pub id:                      IncidentId,
    pub kind:                    IncidentKind,
    /// 1–5, drawn from [`IncidentKind::severity_range`].
    pub severity:                u8,
    pub location:                GeoPoint,
    pub affected_radius_m:       u32,
    pub started_at:              Timestamp,
    pub estimated_clear_minutes: u32,
    pub description:             String,
    /// The segment the incident was generated on.
    pub segment_id:              SegmentId,
    pub segment_name:            Cow<'static, str>,
    /// Interpolation parameter in `[0, 1)`: `location = start + t * (end - start)`.
    pub segment_t:               f64,
}

impl Incident {
    /// The moment this incident is due to clear.
    #[inline]
    pub fn clears_at(&self) -> Timestamp {
        self.started_at.offset_minutes(self.estimated_clear_minutes as u64)
    }

    /// `now - started_at >= estimated_clear_minutes * 60_000`.
    #[inline]
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now >= self.clears_at()
    }

    /// Estimated delay contribution in minutes (`severity * 3`).
    #[inline]
    pub fn estimated_delay_minutes(&self) -> u32 {
        self.severity as u32 * 3
    }
}
