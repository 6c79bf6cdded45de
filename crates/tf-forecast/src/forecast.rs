//! Short-horizon forecast: a 0–100 score and a trend direction.
//!
//! ```text
//! current   = mean(segment intensities)
//! baseline  = Σ w[i] · recent[i]   if history ≥ 3   (last ≤ 4 points, oldest first)
//!           = current              otherwise
//! baseline *= 1.2                  if the horizon hour is a peak hour
//! score     = floor(min(baseline, 100))
//! trend     = up | down | stable   by baseline − current against ±3
//! ```

use std::fmt;

use tf_core::PeakWindows;
use tf_network::{average_intensity, Segment};

use crate::HistoryBuffer;

/// Weights applied to the last four history points, oldest first.
pub const RECENT_WEIGHTS: [f64; 4] = [0.15, 0.25, 0.30, 0.30];
/// Minimum history length before the weighted baseline is used.
pub const MIN_HISTORY_POINTS: usize = 3;
/// Multiplier applied when the horizon falls in a peak window.
pub const PEAK_FORECAST_FACTOR: f64 = 1.2;
/// Half-width of the band in which the trend is reported as stable.
pub const TREND_BAND: f64 = 3.0;

/// Direction of the forecast relative to the current average.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    /// Classify `baseline - current` against the ±[`TREND_BAND`] band.
    pub fn classify(diff: f64) -> Trend {
        if diff > TREND_BAND {
            Trend::Up
        } else if diff < -TREND_BAND {
            Trend::Down
        } else {
            Trend::Stable
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Trend::Up     => "up",
            Trend::Down   => "down",
            Trend::Stable => "stable",
        })
    }
}

/// Derived forecast; not persisted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastResult {
    /// 0–100.
    pub score: u32,
    pub trend: Trend,
}

/// Weighted mean of the newest four history points.
///
/// Weights are applied by position within the window; with fewer than four
/// points only the leading weights are used (they are not renormalised).
/// Returns `None` below [`MIN_HISTORY_POINTS`].
pub fn weighted_baseline(history: &HistoryBuffer) -> Option<f64> {
    if history.len() < MIN_HISTORY_POINTS {
        return None;
    }
    let last_weight = RECENT_WEIGHTS[RECENT_WEIGHTS.len() - 1];
    let value = history
        .recent(RECENT_WEIGHTS.len())
        .enumerate()
        .fold(0.0, |sum, (i, p)| {
            let w = RECENT_WEIGHTS.get(i).copied().unwrap_or(last_weight);
            sum + p.avg_intensity as f64 * w
        });
    Some(value)
}

/// Forecast the network state `horizon_hour` (local hour of now + horizon).
pub fn calculate_forecast(
    segments:     &[Segment],
    history:      &HistoryBuffer,
    horizon_hour: u32,
    peaks:        &PeakWindows,
) -> ForecastResult {
    let current = average_intensity(segments);
    let mut baseline = weighted_baseline(history).unwrap_or(current);

    if peaks.contains(horizon_hour) {
        baseline *= PEAK_FORECAST_FACTOR;
    }

    ForecastResult {
        score: baseline.min(100.0).max(0.0).floor() as u32,
        trend: Trend::classify(baseline - current),
    }
}
