//! `tf-core` — foundational types for the traffic forecast engine.
//!
//! This crate is a dependency of every other `tf-*` crate.  It has no `tf-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `SegmentId`, `IncidentId`                             |
//! | [`geo`]         | `GeoPoint`, haversine distance, interpolation         |
//! | [`time`]        | `Timestamp`, `LocalClock`, `PeakWindows`              |
//! | [`rng`]         | `SimRng` (global), `SegmentRng` (per-segment stream)  |
//! | [`config`]      | `EngineConfig`                                        |
//! | [`error`]       | `TfError`, `TfResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::EngineConfig;
pub use error::{TfError, TfResult};
pub use geo::GeoPoint;
pub use ids::{IncidentId, SegmentId};
pub use rng::{SegmentRng, SimRng};
pub use time::{LocalClock, PeakWindows, Timestamp};
