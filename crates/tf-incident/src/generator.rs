//! Randomized incident generation.

use tf_core::{IncidentId, SimRng, Timestamp};
use tf_network::Segment;
use tracing::debug;

use crate::{Incident, IncidentKind};

/// Produces incidents anchored to random points on existing segments.
///
/// The generator only owns the id counter; the caller inserts the returned
/// incident into the active set and schedules its removal.
#[derive(Debug, Default)]
pub struct IncidentGenerator {
    next_id: u64,
}

impl IncidentGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate one incident at `now`.
    ///
    /// Draw order: segment (uniform), interpolation fraction `t ~ U[0,1)`,
    /// kind (uniform), then severity, clear minutes and radius from the
    /// kind's inclusive ranges.  Returns `None` if `segments` is empty.
    pub fn generate(
        &mut self,
        segments: &[Segment],
        now:      Timestamp,
        rng:      &mut SimRng,
    ) -> Option<Incident> {
        let segment = rng.choose(segments)?;
        let t: f64 = rng.random();
        let location = segment.start.lerp(segment.end, t);

        let kind = IncidentKind::ALL[rng.gen_range(0..IncidentKind::ALL.len())];
        let severity = rng.gen_range(kind.severity_range());
        let estimated_clear_minutes = rng.gen_range(kind.clear_minutes_range());
        let affected_radius_m = rng.gen_range(kind.radius_range_m());

        let id = IncidentId(self.next_id);
        self.next_id += 1;

        debug!(%id, %kind, severity, segment = %segment.name, "generated incident");

        Some(Incident {
            id,
            kind,
            severity,
            location,
            affected_radius_m,
            started_at: now,
            estimated_clear_minutes,
            description: kind.describe(&segment.name),
            segment_id: segment.id,
            segment_name: segment.name.clone(),
            segment_t: t,
        })
    }
}
