//! Fluent builder for constructing a [`Simulation`].

use std::borrow::Cow;

use tf_core::{EngineConfig, SimRng};
use tf_network::{city_or_default, RoadDefinition, DEFAULT_CITY_KEY};
use tracing::info;

use crate::{SimResult, Simulation, TrafficState};

/// Stream offset for the scheduling RNG derived from the master seed.
const SCHEDULE_STREAM: u64 = 1;

/// Fluent builder for [`Simulation`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                  |
/// |-----------------|------------------------------------------|
/// | `.city(key)`    | `"ankara"`                               |
/// | `.roads(v)`     | The built-in catalog for the city        |
/// | `.rng(r)`       | `SimRng::new(config.seed)`               |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimulationBuilder::new(EngineConfig::default())
///     .city("istanbul")
///     .build()?;
/// sim.start();
/// sim.run_for(10 * 60_000, &mut NoopObserver);
/// ```
pub struct SimulationBuilder {
    config: EngineConfig,
    city:   String,
    roads:  Option<Vec<RoadDefinition>>,
    rng:    Option<SimRng>,
}

impl SimulationBuilder {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            city:  DEFAULT_CITY_KEY.to_owned(),
            roads: None,
            rng:   None,
        }
    }

    /// Built-in city to start in.  Unknown keys fall back to the default.
    pub fn city(mut self, key: impl Into<String>) -> Self {
        self.city = key.into();
        self
    }

    /// Replace the city's built-in catalog with custom roads (for example
    /// from [`tf_network::load_roads_csv`]).  The catalog survives
    /// [`Simulation::reset`] but not a city change.
    pub fn roads(mut self, roads: Vec<RoadDefinition>) -> Self {
        self.roads = Some(roads);
        self
    }

    /// Inject the master random source instead of seeding from the config.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the config, create the initial segments, and return a paused
    /// [`Simulation`].
    pub fn build(self) -> SimResult<Simulation> {
        self.config.validate()?;

        let mut rng = self.rng.unwrap_or_else(|| SimRng::new(self.config.seed));
        let schedule_rng = rng.child(SCHEDULE_STREAM);

        let capacity = self.config.history_capacity;
        let state = match self.roads {
            Some(roads) => {
                TrafficState::from_roads(city_or_default(&self.city), Cow::Owned(roads), capacity, &mut rng)
            }
            None => TrafficState::new(&self.city, capacity, &mut rng),
        };

        info!(city = state.city.key, segments = state.segments.len(), "simulation built");
        Ok(Simulation::from_parts(self.config, state, rng, schedule_rng))
    }
}
