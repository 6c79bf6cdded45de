//! Time model.
//!
//! # Design
//!
//! Time is a Unix timestamp in milliseconds (`Timestamp`).  Incidents are
//! stamped with it at creation and expire once
//!
//!   now - started_at >= estimated_clear_minutes * 60_000
//!
//! Peak-hour decisions need the *local* hour of day.  `LocalClock` holds a
//! fixed UTC offset and does the conversion with plain integer arithmetic,
//! so no datetime library or host timezone database is involved and runs
//! stay reproducible across machines.

use std::fmt;

const MS_PER_MINUTE: u64 = 60_000;
const SECS_PER_DAY: i64 = 86_400;

// ── Timestamp ────────────────────────────────────────────────────────────────

/// Milliseconds since the Unix epoch.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    /// The timestamp `ms` milliseconds after `self`.
    #[inline]
    pub fn offset_ms(self, ms: u64) -> Timestamp {
        Timestamp(self.0.saturating_add(ms))
    }

    /// The timestamp `minutes` minutes after `self`.
    #[inline]
    pub fn offset_minutes(self, minutes: u64) -> Timestamp {
        self.offset_ms(minutes.saturating_mul(MS_PER_MINUTE))
    }

    /// Milliseconds elapsed from `earlier` to `self`; zero if `earlier` is
    /// in the future.
    #[inline]
    pub fn since(self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Timestamp {
    type Output = Timestamp;
    #[inline]
    fn add(self, rhs: u64) -> Timestamp {
        self.offset_ms(rhs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// ── LocalClock ───────────────────────────────────────────────────────────────

/// Converts timestamps into local wall-clock components for a fixed UTC
/// offset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalClock {
    pub utc_offset_secs: i32,
}

impl LocalClock {
    pub fn new(utc_offset_secs: i32) -> Self {
        Self { utc_offset_secs }
    }

    /// Seconds since local midnight.
    fn secs_of_day(&self, ts: Timestamp) -> i64 {
        let local = (ts.0 / 1_000) as i64 + self.utc_offset_secs as i64;
        local.rem_euclid(SECS_PER_DAY)
    }

    /// Local hour of day, `0..=23`.
    pub fn hour(&self, ts: Timestamp) -> u32 {
        (self.secs_of_day(ts) / 3_600) as u32
    }

    /// Local `(hour, minute)`.
    pub fn hour_minute(&self, ts: Timestamp) -> (u32, u32) {
        let secs = self.secs_of_day(ts);
        ((secs / 3_600) as u32, ((secs % 3_600) / 60) as u32)
    }

    /// `HH:MM` display label, as shown on the trend chart.
    pub fn label(&self, ts: Timestamp) -> String {
        let (h, m) = self.hour_minute(ts);
        format!("{h:02}:{m:02}")
    }
}

impl Default for LocalClock {
    /// UTC+3 (Türkiye, no DST).
    fn default() -> Self {
        Self::new(3 * 3_600)
    }
}

// ── PeakWindows ──────────────────────────────────────────────────────────────

/// Morning and evening rush-hour windows, inclusive on both ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeakWindows {
    pub morning: (u32, u32),
    pub evening: (u32, u32),
}

impl PeakWindows {
    /// Is `hour` inside either window?
    #[inline]
    pub fn contains(&self, hour: u32) -> bool {
        let (ms, me) = self.morning;
        let (es, ee) = self.evening;
        (ms..=me).contains(&hour) || (es..=ee).contains(&hour)
    }
}

impl Default for PeakWindows {
    fn default() -> Self {
        Self { morning: (8, 10), evening: (17, 19) }
    }
}
