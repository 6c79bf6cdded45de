//! Rule-based response suggestions.
//!
//! A fixed table keyed on incident kind and a per-kind severity threshold:
//!
//! | Kind              | Threshold | At or above threshold          | Below threshold |
//! |-------------------|-----------|--------------------------------|-----------------|
//! | collision         | 4         | 3 urgent actions + base 3      | base 3          |
//! | road-work         | 3         | 3 planning actions + base 2    | base 2          |
//! | vehicle-breakdown | 2         | base 2 + police support        | base 2          |
//!
//! The high-severity list always contains every low-severity action, with
//! the more urgent ones first.

use std::borrow::Cow;

use tf_core::IncidentId;

use crate::{Incident, IncidentKind};

/// Severity at which a collision needs emergency services.
pub const COLLISION_URGENT_SEVERITY: u8 = 4;
/// Severity at which road work needs lane closure planning.
pub const ROAD_WORK_URGENT_SEVERITY: u8 = 3;
/// Severity at which a breakdown needs police support.
pub const BREAKDOWN_URGENT_SEVERITY: u8 = 2;

/// Ordered mitigation actions for `incident`.
pub fn generate_response_suggestions(incident: &Incident) -> Vec<String> {
    let mut actions = Vec::new();
    match incident.kind {
        IncidentKind::Collision => {
            if incident.severity >= COLLISION_URGENT_SEVERITY {
                actions.push(format!("Dispatch ambulance to {}", incident.segment_name));
                actions.push("Deploy crash response crews".to_owned());
                actions.push("Send emergency alert to drivers: use alternative routes".to_owned());
            }
            actions.push("Dispatch tow service".to_owned());
            actions.push("Request traffic police support".to_owned());
            actions.push("Update GPS navigation routing".to_owned());
        }
        IncidentKind::RoadWork => {
            if incident.severity >= ROAD_WORK_URGENT_SEVERITY {
                actions.push("Send marking crews for lane closure".to_owned());
                actions.push("Plan alternative routes".to_owned());
                actions.push("Activate variable message signs".to_owned());
            }
            actions.push("Place warning signs".to_owned());
            actions.push("Direct traffic flow around the work zone".to_owned());
        }
        IncidentKind::VehicleBreakdown => {
            actions.push("Notify the nearest tow service".to_owned());
            actions.push("Open the emergency lane".to_owned());
            if incident.severity >= BREAKDOWN_URGENT_SEVERITY {
                actions.push("Request police support".to_owned());
            }
        }
    }
    actions
}

/// Suggestions bundled with the incident they answer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResponseSuggestion {
    pub incident_id:   IncidentId,
    pub incident_kind: IncidentKind,
    /// Name of the segment the incident is on.
    pub location:      Cow<'static, str>,
    pub suggestions:   Vec<String>,
}

impl ResponseSuggestion {
    pub fn for_incident(incident: &Incident) -> Self {
        Self {
            incident_id:   incident.id,
            incident_kind: incident.kind,
            location:      incident.segment_name.clone(),
            suggestions:   generate_response_suggestions(incident),
        }
    }
}
