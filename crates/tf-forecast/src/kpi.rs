//! Dashboard KPIs and intensity bands.

use std::fmt;

use tf_incident::Incident;
use tf_network::{average_intensity, Segment};

/// Headline numbers for the current state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficKpis {
    /// Floored mean segment intensity; 0 with no segments.
    pub average_score:       u32,
    pub active_incidents:    usize,
    /// Σ severity × 3 over active incidents.
    pub total_delay_minutes: u32,
}

impl TrafficKpis {
    pub fn compute(segments: &[Segment], incidents: &[Incident]) -> Self {
        Self {
            average_score:       average_intensity(segments).floor() as u32,
            active_incidents:    incidents.len(),
            total_delay_minutes: incidents.iter().map(Incident::estimated_delay_minutes).sum(),
        }
    }
}

/// Congestion band of an intensity value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IntensityLevel {
    /// `< 30`
    Low,
    /// `30..60`
    Moderate,
    /// `60..80`
    Heavy,
    /// `>= 80`
    Severe,
}

impl IntensityLevel {
    pub fn from_intensity(intensity: f64) -> Self {
        if intensity < 30.0 {
            IntensityLevel::Low
        } else if intensity < 60.0 {
            IntensityLevel::Moderate
        } else if intensity < 80.0 {
            IntensityLevel::Heavy
        } else {
            IntensityLevel::Severe
        }
    }
}

impl fmt::Display for IntensityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IntensityLevel::Low      => "low",
            IntensityLevel::Moderate => "moderate",
            IntensityLevel::Heavy    => "heavy",
            IntensityLevel::Severe   => "severe",
        })
    }
}
