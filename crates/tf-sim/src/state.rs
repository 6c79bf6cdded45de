//! The single owner of segments, incidents, and history.

use std::borrow::Cow;

use tf_core::{IncidentId, SimRng, Timestamp};
use tf_forecast::{HistoricalDataPoint, HistoryBuffer};
use tf_incident::Incident;
use tf_network::{
    average_intensity, city_or_default, create_segments_from, find_city, roads_or_default, City,
    RoadDefinition, Segment,
};
use tracing::{info, warn};

/// Current traffic picture for one city.
///
/// Segments are replaced wholesale on every update; incidents and history
/// points are added and removed one at a time.  A city change or reset
/// discards all three.
#[derive(Debug)]
pub struct TrafficState {
    pub city:      &'static City,
    pub segments:  Vec<Segment>,
    pub incidents: Vec<Incident>,
    pub history:   HistoryBuffer,
    roads:         Cow<'static, [RoadDefinition]>,
}

impl TrafficState {
    /// Fresh state for a built-in city.  Unknown keys fall back to the
    /// default city.
    pub fn new(city_key: &str, history_capacity: usize, rng: &mut SimRng) -> Self {
        let city = resolve_city(city_key);
        Self::from_roads(city, Cow::Borrowed(roads_or_default(city.key)), history_capacity, rng)
    }

    /// Fresh state over a custom road catalog, labelled as `city`.
    pub fn from_roads(
        city:             &'static City,
        roads:            Cow<'static, [RoadDefinition]>,
        history_capacity: usize,
        rng:              &mut SimRng,
    ) -> Self {
        Self {
            city,
            segments: create_segments_from(&roads, rng),
            incidents: Vec::new(),
            history: HistoryBuffer::new(history_capacity),
            roads,
        }
    }

    /// Switch to a built-in city, discarding all incidents and history.
    pub fn select_city(&mut self, city_key: &str, rng: &mut SimRng) {
        let city = resolve_city(city_key);
        info!(city = city.key, "selecting city");
        self.city = city;
        self.roads = Cow::Borrowed(roads_or_default(city.key));
        self.reset(rng);
    }

    /// Rebuild segments from the current catalog and clear incidents and
    /// history.
    pub fn reset(&mut self, rng: &mut SimRng) {
        self.segments = create_segments_from(&self.roads, rng);
        self.incidents.clear();
        self.history.clear();
    }

    /// Replace the segment set with the result of an intensity update.
    pub fn apply_update(&mut self, segments: Vec<Segment>) {
        self.segments = segments;
    }

    pub fn add_incident(&mut self, incident: Incident) {
        self.incidents.push(incident);
    }

    /// Remove the incident with `id`.  Returns `false` if it was not active.
    pub fn remove_incident(&mut self, id: IncidentId) -> bool {
        match self.incidents.iter().position(|i| i.id == id) {
            Some(pos) => {
                self.incidents.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Remove every incident whose clearance time is at or before `now`.
    ///
    /// Returns the removed ids in insertion order.  Calling it again with
    /// the same `now` removes nothing.
    pub fn expire_incidents(&mut self, now: Timestamp) -> Vec<IncidentId> {
        let mut expired = Vec::new();
        self.incidents.retain(|i| {
            if i.is_expired(now) {
                expired.push(i.id);
                false
            } else {
                true
            }
        });
        expired
    }

    /// Append a history point, evicting the oldest beyond capacity.
    pub fn append_historical_sample(&mut self, point: HistoricalDataPoint) -> Option<HistoricalDataPoint> {
        self.history.push(point)
    }

    pub fn incident(&self, id: IncidentId) -> Option<&Incident> {
        self.incidents.iter().find(|i| i.id == id)
    }

    pub fn average_intensity(&self) -> f64 {
        average_intensity(&self.segments)
    }

    pub fn roads(&self) -> &[RoadDefinition] {
        &self.roads
    }
}

fn resolve_city(city_key: &str) -> &'static City {
    find_city(city_key).unwrap_or_else(|| {
        warn!(city = city_key, "unknown city key, using default city");
        city_or_default(city_key)
    })
}
