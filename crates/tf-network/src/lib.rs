//! `tf-network` — cities, road catalogs, and live road segments.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`city`]      | `City`, `CITIES`, `find_city`, `city_or_default`          |
//! | [`catalog`]   | `RoadDefinition`, built-in per-city road tables           |
//! | [`segment`]   | `Segment`, `average_intensity`                            |
//! | [`factory`]   | `create_segments`, `create_segments_from`                 |
//! | [`index`]     | `SegmentIndex` (R-tree over segment midpoints)            |
//! | [`loader`]    | `load_roads_csv`, `load_roads_reader`                     |
//!
//! Segment identity is the road's position in its catalog, so ids are only
//! unique within one city's active set.  A city change or reset discards the
//! whole set; there is no partial replacement.

pub mod catalog;
pub mod city;
pub mod factory;
pub mod index;
pub mod loader;
pub mod segment;

#[cfg(test)]
mod tests;

pub use catalog::{roads_for, roads_or_default, RoadDefinition};
pub use city::{city_or_default, find_city, City, CITIES, DEFAULT_CITY_KEY};
pub use factory::{create_segments, create_segments_from};
pub use index::SegmentIndex;
pub use loader::{load_roads_csv, load_roads_reader};
pub use segment::{average_intensity, Segment};
