//! The `Simulation` struct and its event loop.

use tf_core::{EngineConfig, IncidentId, LocalClock, SimRng, Timestamp};
use tf_forecast::{calculate_forecast, ForecastResult, HistoricalDataPoint, TrafficKpis};
use tf_incident::{Incident, IncidentGenerator, ResponseSuggestion};
use tf_network::SegmentIndex;
use tracing::{debug, info};

use crate::event_queue::{EventQueue, SimEvent};
use crate::intensity::update_segments;
use crate::{SimObserver, TrafficState};

// ── Simulation ────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Simulation` owns the [`TrafficState`] and drives it from one
/// [`EventQueue`]:
///
/// | Event              | Cadence (defaults)                     | Effect                          |
/// |--------------------|----------------------------------------|---------------------------------|
/// | `UpdateTick`       | every 5 s                              | swap in updated segments        |
/// | `SpawnIncident`    | 5 s after start, then every 20–40 s    | add incident, schedule expiry   |
/// | `ExpireIncident`   | `started_at + clear minutes`           | drop expired incidents          |
/// | `SampleHistory`    | on start, then every 60 s              | append a history point          |
///
/// The simulation is created paused.  [`start`][Self::start] arms the three
/// recurring events; [`pause`][Self::pause] withdraws them again.  Expiry
/// events stay queued while paused, so incidents still clear on time.
///
/// Create via [`SimulationBuilder`][crate::SimulationBuilder].
pub struct Simulation {
    pub config: EngineConfig,

    /// Converts timestamps to local hours and `HH:MM` labels.
    pub clock: LocalClock,

    /// Current time.  Advanced to each handled event and then to the
    /// deadline of every `run_until` call.
    pub now: Timestamp,

    pub state: TrafficState,

    /// R-tree over the current city's segment midpoints.
    pub index: SegmentIndex,

    pub generator: IncidentGenerator,

    pub queue: EventQueue,

    /// Model draws: segment initialisation, intensity noise, incidents.
    pub rng: SimRng,

    /// Incident spacing draws, kept apart so scheduling does not shift the
    /// model's random stream.
    pub schedule_rng: SimRng,

    running: bool,

    /// Incidents dropped outside the event loop, reported to the observer
    /// at the start of the next `run_until`.
    removed: Vec<(IncidentId, Timestamp)>,
}

impl Simulation {
    pub(crate) fn from_parts(
        config:       EngineConfig,
        state:        TrafficState,
        rng:          SimRng,
        schedule_rng: SimRng,
    ) -> Self {
        let index = SegmentIndex::build(&state.segments);
        Self {
            clock: config.make_clock(),
            now: config.start(),
            config,
            state,
            index,
            generator: IncidentGenerator::new(),
            queue: EventQueue::new(),
            rng,
            schedule_rng,
            running: false,
            removed: Vec::new(),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start (or resume) the recurring work from the current time.
    ///
    /// Schedules an immediate history sample, the first intensity tick one
    /// period out, and the first incident after the configured delay.  Has
    /// no effect if already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.arm(self.now);
        info!(at = %self.clock.label(self.now), "simulation running");
    }

    /// Resume at `now` (moving the clock forward if needed).
    ///
    /// Smoothing continues from the last committed intensities.
    pub fn resume(&mut self, now: Timestamp) {
        if now > self.now {
            self.now = now;
        }
        self.start();
    }

    /// Stop all recurring work.  State and pending expiries are untouched.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.queue.retain(|e| !e.is_recurring());
        info!(at = %self.clock.label(self.now), "simulation paused");
    }

    /// Switch city.  Drops every pending event and all incidents and
    /// history; recurring work is re-armed if the simulation was running.
    pub fn select_city(&mut self, city_key: &str) {
        self.withdraw_all();
        self.state.select_city(city_key, &mut self.rng);
        self.after_rebuild();
        if self.running {
            self.arm(self.now);
        }
    }

    /// Rebuild segments for the current city and stop the simulation.
    pub fn reset(&mut self) {
        info!(city = self.state.city.key, "resetting simulation");
        self.withdraw_all();
        self.state.reset(&mut self.rng);
        self.after_rebuild();
        self.running = false;
    }

    /// Remove an incident ahead of its clearance time.
    ///
    /// Works whether or not the simulation is running.  The pending expiry
    /// event, if any, becomes a no-op.  Observers see the clearance, stamped
    /// with the current time, on the next `run_until`.
    pub fn remove_incident(&mut self, id: IncidentId) -> bool {
        let removed = self.state.remove_incident(id);
        if removed {
            info!(%id, "incident removed");
            self.removed.push((id, self.now));
        }
        removed
    }

    /// Report incidents removed since the last run to `observer` without
    /// advancing the clock.  `run_until` calls this first.
    pub fn report_removed<O: SimObserver>(&mut self, observer: &mut O) {
        for (id, at) in self.removed.drain(..) {
            observer.on_incident_cleared(id, at);
        }
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// Handle every event due at or before `deadline`, in time order.
    ///
    /// Returns the number of events handled.  The clock ends at `deadline`
    /// (or stays put if already past it).
    pub fn run_until<O: SimObserver>(&mut self, deadline: Timestamp, observer: &mut O) -> usize {
        self.report_removed(observer);
        let mut handled = 0;
        while let Some((at, event)) = self.queue.pop_due(deadline) {
            self.now = at;
            self.handle(at, event, observer);
            handled += 1;
        }
        if deadline > self.now {
            self.now = deadline;
        }
        observer.on_run_end(self.now);
        handled
    }

    /// Run for `duration_ms` from the current time.
    pub fn run_for<O: SimObserver>(&mut self, duration_ms: u64, observer: &mut O) -> usize {
        self.run_until(self.now.offset_ms(duration_ms), observer)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Forecast for `forecast_horizon_mins` ahead of the current time.
    pub fn forecast(&self) -> ForecastResult {
        let horizon = self.now.offset_minutes(self.config.forecast_horizon_mins);
        calculate_forecast(
            &self.state.segments,
            &self.state.history,
            self.clock.hour(horizon),
            &self.config.peaks,
        )
    }

    /// Response suggestions for an active incident.
    pub fn suggestions(&self, id: IncidentId) -> Option<ResponseSuggestion> {
        self.state.incident(id).map(ResponseSuggestion::for_incident)
    }

    pub fn kpis(&self) -> TrafficKpis {
        TrafficKpis::compute(&self.state.segments, &self.state.incidents)
    }

    pub fn incidents(&self) -> &[Incident] {
        &self.state.incidents
    }

    // ── Event handling ────────────────────────────────────────────────────

    fn arm(&mut self, from: Timestamp) {
        self.queue.push(from, SimEvent::SampleHistory);
        self.queue.push(from.offset_ms(self.config.tick_period_ms), SimEvent::UpdateTick);
        self.queue.push(from.offset_ms(self.config.first_incident_delay_ms), SimEvent::SpawnIncident);
    }

    /// Queue every active incident as removed ahead of a rebuild.
    fn withdraw_all(&mut self) {
        let now = self.now;
        self.removed.extend(self.state.incidents.iter().map(|i| (i.id, now)));
    }

    fn after_rebuild(&mut self) {
        self.queue.clear();
        self.index = SegmentIndex::build(&self.state.segments);
    }

    fn handle<O: SimObserver>(&mut self, at: Timestamp, event: SimEvent, observer: &mut O) {
        match event {
            SimEvent::UpdateTick => {
                let updated = update_segments(
                    &self.state.segments,
                    &self.state.incidents,
                    self.clock.hour(at),
                    &self.config.peaks,
                    &mut self.rng,
                );
                self.state.apply_update(updated);
                debug!(%at, avg = self.state.average_intensity(), "intensity tick");
                observer.on_tick_end(at, &self.state.segments);
                self.queue.push(at.offset_ms(self.config.tick_period_ms), SimEvent::UpdateTick);
            }

            SimEvent::SpawnIncident => {
                if let Some(incident) = self.generator.generate(&self.state.segments, at, &mut self.rng) {
                    let affected = self
                        .index
                        .within_radius(incident.location, incident.affected_radius_m as f64);
                    info!(
                        id = %incident.id,
                        kind = %incident.kind,
                        severity = incident.severity,
                        affected = affected.len(),
                        "{}", incident.description
                    );
                    self.queue.push(incident.clears_at(), SimEvent::ExpireIncident(incident.id));
                    observer.on_incident_spawned(&incident, &affected);
                    self.state.add_incident(incident);
                }
                let (lo, hi) = self.config.incident_spacing_ms;
                let spacing = self.schedule_rng.gen_range(lo..=hi);
                self.queue.push(at.offset_ms(spacing), SimEvent::SpawnIncident);
            }

            SimEvent::ExpireIncident(_) => {
                for id in self.state.expire_incidents(at) {
                    info!(%id, "incident cleared");
                    observer.on_incident_cleared(id, at);
                }
            }

            SimEvent::SampleHistory => {
                let point = HistoricalDataPoint::sample(&self.state.segments, self.clock.label(at));
                debug!(time = %point.time, avg = point.avg_intensity, "history sample");
                self.state.append_historical_sample(point.clone());
                observer.on_history_sample(at, &point);
                self.queue.push(at.offset_ms(self.config.history_period_ms), SimEvent::SampleHistory);
            }
        }
    }
}
