//! Plain data row types written by output backends.

use std::fmt;

use tf_incident::{Incident, IncidentKind};

/// One segment's intensity after an update tick.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSnapshotRow {
    pub unix_ms:    u64,
    pub segment_id: u32,
    pub name:       String,
    pub intensity:  f64,
}

/// Lifecycle transition recorded in `incident_events.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncidentEvent {
    Spawned,
    Cleared,
}

impl fmt::Display for IncidentEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IncidentEvent::Spawned => "spawned",
            IncidentEvent::Cleared => "cleared",
        })
    }
}

/// An incident spawn or clear.  Clear rows repeat the spawn attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncidentEventRow {
    pub unix_ms:       u64,
    pub incident_id:   u64,
    pub event:         IncidentEvent,
    pub kind:          IncidentKind,
    pub severity:      u8,
    pub lat:           f64,
    pub lng:           f64,
    pub radius_m:      u32,
    pub clear_minutes: u32,
}

impl IncidentEventRow {
    pub fn spawned(incident: &Incident) -> Self {
        Self {
            unix_ms:       incident.started_at.0,
            incident_id:   incident.id.0,
            event:         IncidentEvent::Spawned,
            kind:          incident.kind,
            severity:      incident.severity,
            lat:           incident.location.lat,
            lng:           incident.location.lng,
            radius_m:      incident.affected_radius_m,
            clear_minutes: incident.estimated_clear_minutes,
        }
    }

    /// The matching clear row at `unix_ms`.
    pub fn cleared(self, unix_ms: u64) -> Self {
        Self { unix_ms, event: IncidentEvent::Cleared, ..self }
    }
}

/// One rolling-history point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySampleRow {
    pub unix_ms:       u64,
    pub time:          String,
    pub avg_intensity: u32,
}
