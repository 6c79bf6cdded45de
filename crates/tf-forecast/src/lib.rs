//! `tf-forecast` — rolling history, forecast, and KPI summaries.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`history`]   | `HistoricalDataPoint`, `HistoryBuffer` (FIFO, cap 30)     |
//! | [`forecast`]  | `calculate_forecast`, `ForecastResult`, `Trend`           |
//! | [`kpi`]       | `TrafficKpis`, `IntensityLevel`                           |
//!
//! Everything here is a pure function of the state it is handed; nothing in
//! this crate mutates segments or incidents.

pub mod forecast;
pub mod history;
pub mod kpi;

#[cfg(test)]
mod tests;

pub use forecast::{calculate_forecast, weighted_baseline, ForecastResult, Trend};
pub use history::{HistoricalDataPoint, HistoryBuffer, DEFAULT_HISTORY_CAPACITY};
pub use kpi::{IntensityLevel, TrafficKpis};
