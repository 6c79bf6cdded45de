//! `tf-incident` — disruption events and how to respond to them.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`kind`]      | `IncidentKind` and its type-specific sampling ranges      |
//! | [`incident`]  | `Incident`                                                |
//! | [`generator`] | `IncidentGenerator`                                       |
//! | [`response`]  | `generate_response_suggestions`, `ResponseSuggestion`     |
//!
//! # Sampling ranges
//!
//! | Kind              | Severity | Clear (min) | Radius (m)  |
//! |-------------------|----------|-------------|-------------|
//! | collision         | 3–5      | 15–45       | 800–1500    |
//! | road-work         | 2–4      | 60–180      | 600–1200    |
//! | vehicle-breakdown | 1–3      | 10–30       | 500–1000    |
//!
//! All ranges are inclusive integer draws.

pub mod generator;
pub mod incident;
pub mod kind;
pub mod response;


pub use generator::IncidentGenerator;
pub use incident::Incident;
pub use kind::IncidentKind;
pub use response::{generate_response_suggestions, ResponseSuggestion};
