//! Engine configuration.
//!
//! Typically built with `EngineConfig::default()` and tweaked, or loaded from
//! a JSON file by the application crate (with the `serde` feature) and passed
//! to the simulation builder.

use crate::time::{LocalClock, PeakWindows, Timestamp};
use crate::{TfError, TfResult};

/// Top-level engine configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Unix timestamp (ms) at which the simulation starts running.
    pub start_unix_ms: u64,

    /// Fixed offset of local time from UTC, in seconds.  Default: +3 h.
    pub utc_offset_secs: i32,

    /// Period of the intensity update tick.  Default: 5 s.
    pub tick_period_ms: u64,

    /// Delay before the first incident after start/resume.  Default: 5 s.
    pub first_incident_delay_ms: u64,

    /// Inclusive range of the random spacing between subsequent incidents.
    /// Default: 20–40 s, redrawn every cycle.
    pub incident_spacing_ms: (u64, u64),

    /// Period of the historical sampler.  Default: 60 s.
    pub history_period_ms: u64,

    /// Rolling history capacity.  Default: 30 points.
    pub history_capacity: usize,

    /// How far ahead the forecast looks when checking for a peak hour.
    pub forecast_horizon_mins: u64,

    /// Rush-hour windows shared by the updater and the forecast.
    pub peaks: PeakWindows,
}

impl EngineConfig {
    /// Check internal consistency.  Called by the simulation builder.
    pub fn validate(&self) -> TfResult<()> {
        if self.tick_period_ms == 0 {
            return Err(TfError::Config("tick_period_ms must be > 0".into()));
        }
        if self.history_period_ms == 0 {
            return Err(TfError::Config("history_period_ms must be > 0".into()));
        }
        let (lo, hi) = self.incident_spacing_ms;
        if lo == 0 || lo > hi {
            return Err(TfError::Config(format!(
                "incident_spacing_ms must be a non-empty positive range, got {lo}..={hi}"
            )));
        }
        if self.history_capacity == 0 {
            return Err(TfError::Config("history_capacity must be > 0".into()));
        }
        for (name, (start, end)) in [("morning", self.peaks.morning), ("evening", self.peaks.evening)] {
            if start > end || end > 23 {
                return Err(TfError::Config(format!(
                    "{name} peak window {start}..={end} is not a valid hour range"
                )));
            }
        }
        Ok(())
    }

    /// The start time as a `Timestamp`.
    #[inline]
    pub fn start(&self) -> Timestamp {
        Timestamp(self.start_unix_ms)
    }

    /// Construct a `LocalClock` for this run's UTC offset.
    pub fn make_clock(&self) -> LocalClock {
        LocalClock::new(self.utc_offset_secs)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed:                    42,
            start_unix_ms:           0,
            utc_offset_secs:         LocalClock::default().utc_offset_secs,
            tick_period_ms:          5_000,
            first_incident_delay_ms: 5_000,
            incident_spacing_ms:     (20_000, 40_000),
            history_period_ms:       60_000,
            history_capacity:        30,
            forecast_horizon_mins:   15,
            peaks:                   PeakWindows::default(),
        }
    }
}
