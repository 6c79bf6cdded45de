//! Incident kinds and their type-specific sampling ranges.

use std::fmt;
use std::ops::RangeInclusive;

/// The closed set of disruption types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum IncidentKind {
    Collision,
    RoadWork,
    VehicleBreakdown,
}

impl IncidentKind {
    /// All variants, in the order used for uniform selection.
    pub const ALL: [IncidentKind; 3] = [
        IncidentKind::Collision,
        IncidentKind::RoadWork,
        IncidentKind::VehicleBreakdown,
    ];

    /// Inclusive severity range (1–5 scale).
    pub fn severity_range(self) -> RangeInclusive<u8> {
        match self {
            IncidentKind::Collision        => 3..=5,
            IncidentKind::RoadWork         => 2..=4,
            IncidentKind::VehicleBreakdown => 1..=3,
        }
    }

    /// Inclusive estimated-clear duration range, minutes.
    pub fn clear_minutes_range(self) -> RangeInclusive<u32> {
        match self {
            IncidentKind::Collision        => 15..=45,
            IncidentKind::RoadWork         => 60..=180,
            IncidentKind::VehicleBreakdown => 10..=30,
        }
    }

    /// Inclusive affected-radius range, metres.
    pub fn radius_range_m(self) -> RangeInclusive<u32> {
        match self {
            IncidentKind::Collision        => 800..=1_500,
            IncidentKind::RoadWork         => 600..=1_200,
            IncidentKind::VehicleBreakdown => 500..=1_000,
        }
    }

    /// Stable machine-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            IncidentKind::Collision        => "collision",
            IncidentKind::RoadWork         => "road-work",
            IncidentKind::VehicleBreakdown => "vehicle-breakdown",
        }
    }

    /// Human-readable description of an incident on `segment_name`.
    pub fn describe(self, segment_name: &str) -> String {
        match self {
            IncidentKind::Collision        => format!("Collision on {segment_name}"),
            IncidentKind::RoadWork         => format!("Road work on {segment_name}"),
            IncidentKind::VehicleBreakdown => format!("Vehicle breakdown on {segment_name}"),
        }
    }
}

impl fmt::Display for IncidentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
