//! Unit tests for tf-forecast.

use tf_core::SimRng;
use tf_network::{create_segments, Segment};

use crate::{HistoricalDataPoint, HistoryBuffer};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Ankara segments carrying the given intensities (one segment per value).
fn segments_with(intensities: &[f64]) -> Vec<Segment> {
    create_segments("ankara", &mut SimRng::new(0))
        .iter()
        .zip(intensities)
        .map(|(s, &v)| s.with_intensity(v))
        .collect()
}

fn history(values: &[u32]) -> HistoryBuffer {
    HistoryBuffer::from_points(
        30,
        values.iter().enumerate().map(|(i, &v)| HistoricalDataPoint::new(format!("12:{i:02}"), v)),
    )
}

const OFF_PEAK: u32 = 12;
const PEAK: u32 = 9;

#[cfg(test)]
mod history_tests {
    use super::{history, segments_with};
    use crate::{HistoricalDataPoint, HistoryBuffer};

    #[test]
    fn never_exceeds_capacity_and_evicts_oldest_first() {
        let mut buf = HistoryBuffer::default();
        for i in 0..100u32 {
            let evicted = buf.push(HistoricalDataPoint::new(format!("{i}"), i % 101));
            if i < 30 {
                assert!(evicted.is_none());
            } else {
                assert_eq!(evicted.unwrap().avg_intensity, i - 30);
            }
            assert!(buf.len() <= 30);
        }
        assert_eq!(buf.len(), 30);
        assert_eq!(buf.iter().next().unwrap().avg_intensity, 70);
        assert_eq!(buf.latest().unwrap().avg_intensity, 99);
    }

    #[test]
    fn recent_returns_newest_in_chronological_order() {
        let buf = history(&[1, 2, 3, 4, 5, 6]);
        let recent: Vec<u32> = buf.recent(4).map(|p| p.avg_intensity).collect();
        assert_eq!(recent, [3, 4, 5, 6]);
        let short = history(&[7, 8]);
        assert_eq!(short.recent(4).count(), 2);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut buf = HistoryBuffer::new(0);
        buf.push(HistoricalDataPoint::new("00:00", 1));
        buf.push(HistoricalDataPoint::new("00:01", 2));
        assert_eq!(buf.len(), 1);
        assert_eq!(buf.capacity(), 1);
    }

    #[test]
    fn sample_floors_the_mean() {
        let segments = segments_with(&[40.9, 41.9]);
        let p = HistoricalDataPoint::sample(&segments, "08:15");
        assert_eq!(p, HistoricalDataPoint::new("08:15", 41));
        assert_eq!(HistoricalDataPoint::sample(&[], "08:16").avg_intensity, 0);
    }
}

#[cfg(test)]
mod forecast_tests {
    use tf_core::PeakWindows;

    use super::{history, segments_with, OFF_PEAK, PEAK};
    use crate::{calculate_forecast, weighted_baseline, ForecastResult, HistoryBuffer, Trend};

    #[test]
    fn weighted_scenario_off_peak() {
        let hist = history(&[20, 30, 40, 50]);
        assert_eq!(weighted_baseline(&hist), Some(37.5));
        let segments = segments_with(&[30.0, 30.0]);
        let f = calculate_forecast(&segments, &hist, OFF_PEAK, &PeakWindows::default());
        assert_eq!(f, ForecastResult { score: 37, trend: Trend::Up });
    }

    #[test]
    fn weighted_scenario_at_peak() {
        let hist = history(&[20, 30, 40, 50]);
        let segments = segments_with(&[44.0]);
        let f = calculate_forecast(&segments, &hist, PEAK, &PeakWindows::default());
        // 37.5 * 1.2 = 45; 45 - 44 = 1 is inside the stable band.
        assert_eq!(f, ForecastResult { score: 45, trend: Trend::Stable });
    }

    #[test]
    fn only_last_four_points_count() {
        let hist = history(&[90, 90, 20, 30, 40, 50]);
        assert_eq!(weighted_baseline(&hist), Some(37.5));
    }

    #[test]
    fn three_points_use_leading_weights() {
        let hist = history(&[60, 60, 60]);
        assert_eq!(weighted_baseline(&hist), Some(42.0));
        let segments = segments_with(&[60.0]);
        let f = calculate_forecast(&segments, &hist, OFF_PEAK, &PeakWindows::default());
        assert_eq!(f, ForecastResult { score: 42, trend: Trend::Down });
    }

    #[test]
    fn short_history_falls_back_to_current_average() {
        let peaks = PeakWindows::default();
        let segments = segments_with(&[50.0, 60.0]);
        for hist in [HistoryBuffer::default(), history(&[10]), history(&[10, 90])] {
            assert_eq!(weighted_baseline(&hist), None);
            let off = calculate_forecast(&segments, &hist, OFF_PEAK, &peaks);
            assert_eq!(off, ForecastResult { score: 55, trend: Trend::Stable });
            let on = calculate_forecast(&segments, &hist, PEAK, &peaks);
            assert_eq!(on.score, (55.0f64 * 1.2).min(100.0).floor() as u32);
            assert_eq!(on.trend, Trend::Up);
        }
    }

    #[test]
    fn score_is_clamped_to_100() {
        let segments = segments_with(&[90.0, 90.0]);
        let f = calculate_forecast(&segments, &HistoryBuffer::default(), PEAK, &PeakWindows::default());
        assert_eq!(f.score, 100);
    }

    #[test]
    fn empty_state_is_zero_and_stable() {
        let f = calculate_forecast(&[], &HistoryBuffer::default(), OFF_PEAK, &PeakWindows::default());
        assert_eq!(f, ForecastResult { score: 0, trend: Trend::Stable });
    }

    #[test]
    fn trend_band_edges() {
        assert_eq!(Trend::classify(3.0), Trend::Stable);
        assert_eq!(Trend::classify(-3.0), Trend::Stable);
        assert_eq!(Trend::classify(3.01), Trend::Up);
        assert_eq!(Trend::classify(-3.01), Trend::Down);
        assert_eq!(Trend::Up.to_string(), "up");
    }
}

#[cfg(test)]
mod kpi_tests {
    use tf_core::{SimRng, Timestamp};
    use tf_incident::IncidentGenerator;

    use super::segments_with;
    use crate::{IntensityLevel, TrafficKpis};

    #[test]
    fn kpis_sum_delay_over_incidents() {
        let segments = segments_with(&[10.0, 20.0, 31.0]);
        let mut rng = SimRng::new(4);
        let mut generator = IncidentGenerator::new();
        let incidents: Vec<_> = (0..5)
            .map(|_| generator.generate(&segments, Timestamp(0), &mut rng).unwrap())
            .collect();
        let expected: u32 = incidents.iter().map(|i| i.severity as u32 * 3).sum();

        let kpis = TrafficKpis::compute(&segments, &incidents);
        assert_eq!(kpis.average_score, 20);
        assert_eq!(kpis.active_incidents, 5);
        assert_eq!(kpis.total_delay_minutes, expected);
    }

    #[test]
    fn kpis_of_empty_state() {
        let kpis = TrafficKpis::compute(&[], &[]);
        assert_eq!(kpis, TrafficKpis { average_score: 0, active_incidents: 0, total_delay_minutes: 0 });
    }

    #[test]
    fn intensity_bands() {
        assert_eq!(IntensityLevel::from_intensity(0.0), IntensityLevel::Low);
        assert_eq!(IntensityLevel::from_intensity(29.99), IntensityLevel::Low);
        assert_eq!(IntensityLevel::from_intensity(30.0), IntensityLevel::Moderate);
        assert_eq!(IntensityLevel::from_intensity(60.0), IntensityLevel::Heavy);
        assert_eq!(IntensityLevel::from_intensity(80.0), IntensityLevel::Severe);
        assert_eq!(IntensityLevel::from_intensity(100.0), IntensityLevel::Severe);
    }
}
