//! `tf-sim` — event loop orchestrator for the traffic forecast engine.
//!
//! # Event loop
//!
//! ```text
//! while the earliest queued event is due by the deadline:
//!   now = event time
//!   UpdateTick        → update_segments(previous state) and swap it in
//!   SpawnIncident     → generate, queue ExpireIncident at clears_at,
//!                       queue next spawn after U[20 s, 40 s]
//!   ExpireIncident    → drop every incident whose clearance time has passed
//!   SampleHistory     → append floor(mean intensity) with an HH:MM label
//! ```
//!
//! Each intensity update reads only the previous tick's segments and
//! incidents and returns a new segment set; nothing is modified in place
//! while the tick is being computed.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the per-segment update on Rayon's thread pool.    |
//! | `serde`    | Forwards `serde` to every `tf-*` dependency.           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tf_core::EngineConfig;
//! use tf_sim::{NoopObserver, SimulationBuilder};
//!
//! let mut sim = SimulationBuilder::new(EngineConfig::default()).city("ankara").build()?;
//! sim.start();
//! sim.run_for(30 * 60_000, &mut NoopObserver);
//! println!("{:?}", sim.forecast());
//! ```

pub mod builder;
pub mod error;
pub mod event_queue;
pub mod intensity;
pub mod observer;
pub mod shared;
pub mod sim;
pub mod state;


pub use builder::SimulationBuilder;
pub use error::{SimError, SimResult};
pub use event_queue::{EventQueue, SimEvent};
pub use intensity::{incident_impact, time_multiplier, update_segments};
pub use observer::{NoopObserver, SimObserver};
pub use shared::SharedSimulation;
pub use sim::Simulation;
pub use state::TrafficState;
