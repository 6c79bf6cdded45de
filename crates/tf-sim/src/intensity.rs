//! The per-tick intensity update.
//!
//! For every segment, in one pass over the previous tick's state:
//!
//! ```text
//! multiplier = 1.4 in a peak hour, else 1.0
//! target     = base_flow · multiplier · U[0.8, 1.2)
//! target    += Σ (severity·10 + U[0,10) + 5) · (1 − (d/r)·0.5)   for incidents with d ≤ r
//! target     = min(target, 100)
//! new        = 0.3 · target + 0.7 · previous
//! ```
//!
//! `d` is the haversine distance from the segment midpoint to the incident
//! and `r` its affected radius.  All terms are non-negative, so only the
//! upper clamp is needed.

use tf_core::{PeakWindows, SegmentRng, SimRng};
use tf_incident::Incident;
use tf_network::Segment;

/// Exponential smoothing factor applied against the previous intensity.
pub const SMOOTHING_ALPHA: f64 = 0.3;
/// Base-flow multiplier inside a peak window.
pub const PEAK_MULTIPLIER: f64 = 1.4;
/// Upper clamp on the per-tick target.
pub const MAX_INTENSITY: f64 = 100.0;

/// Time-of-day multiplier for the local `hour`.
#[inline]
pub fn time_multiplier(hour: u32, peaks: &PeakWindows) -> f64 {
    if peaks.contains(hour) { PEAK_MULTIPLIER } else { 1.0 }
}

/// Impact of one incident on a segment whose midpoint is `distance_m` away.
///
/// Zero beyond the radius.  Inside, the base term `severity·10 + noise + 5`
/// decays linearly to half its value at the boundary.  `noise` is the
/// `U[0,10)` draw.
pub fn incident_impact(severity: u8, distance_m: f64, radius_m: f64, noise: f64) -> f64 {
    if distance_m > radius_m {
        return 0.0;
    }
    let falloff = if radius_m > 0.0 { 1.0 - (distance_m / radius_m) * 0.5 } else { 1.0 };
    (severity as f64 * 10.0 + noise + 5.0) * falloff
}

/// One segment's next intensity.
fn next_intensity(
    segment:    &Segment,
    incidents:  &[Incident],
    multiplier: f64,
    rng:        &mut SegmentRng,
) -> f64 {
    let mut target = segment.base_flow * multiplier * rng.gen_range(0.8..1.2);

    let mid = segment.midpoint();
    for incident in incidents {
        let radius = incident.affected_radius_m as f64;
        let distance = mid.distance_m(incident.location);
        if distance <= radius {
            let noise: f64 = rng.gen_range(0.0..10.0);
            target += incident_impact(incident.severity, distance, radius, noise);
        }
    }

    let target = target.min(MAX_INTENSITY);
    target * SMOOTHING_ALPHA + segment.current_intensity * (1.0 - SMOOTHING_ALPHA)
}

/// Recompute every segment's intensity from the previous tick's state.
///
/// Returns a fresh segment set for the caller to swap in; `segments` and
/// `incidents` are only read.  One `u64` is drawn from `rng` per call and
/// expanded into a [`SegmentRng`] per segment, so the result does not depend
/// on evaluation order.
pub fn update_segments(
    segments:  &[Segment],
    incidents: &[Incident],
    hour:      u32,
    peaks:     &PeakWindows,
    rng:       &mut SimRng,
) -> Vec<Segment> {
    let multiplier = time_multiplier(hour, peaks);
    let tick_seed: u64 = rng.random();

    let step = |segment: &Segment| {
        let mut seg_rng = SegmentRng::new(tick_seed, segment.id);
        segment.with_intensity(next_intensity(segment, incidents, multiplier, &mut seg_rng))
    };

    #[cfg(not(feature = "parallel"))]
    {
        segments.iter().map(step).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        segments.par_iter().map(step).collect()
    }
}
