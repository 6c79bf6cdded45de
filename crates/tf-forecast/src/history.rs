//! Bounded rolling window of average-intensity samples.
//!
//! A FIFO of fixed capacity: once full, every push evicts the oldest point.
//! Points are kept in arrival order, which is also chronological order since
//! the sampler only ever appends.

use std::collections::VecDeque;

use tf_network::{average_intensity, Segment};

/// Default number of retained samples.
pub const DEFAULT_HISTORY_CAPACITY: usize = 30;

/// One sampler reading.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoricalDataPoint {
    /// Local `HH:MM` display label.
    pub time:          String,
    /// Floored mean segment intensity, 0–100.
    pub avg_intensity: u32,
}

impl HistoricalDataPoint {
    pub fn new(time: impl Into<String>, avg_intensity: u32) -> Self {
        Self { time: time.into(), avg_intensity }
    }

    /// Snapshot the mean intensity of `segments` (0 for an empty set).
    pub fn sample(segments: &[Segment], time: impl Into<String>) -> Self {
        Self::new(time, average_intensity(segments).floor() as u32)
    }
}

/// Fixed-capacity FIFO of [`HistoricalDataPoint`]s.
#[derive(Clone, Debug)]
pub struct HistoryBuffer {
    points:   VecDeque<HistoricalDataPoint>,
    capacity: usize,
}

impl HistoryBuffer {
    /// Create an empty buffer.  A zero capacity is treated as 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { points: VecDeque::with_capacity(capacity), capacity }
    }

    /// Build a buffer from points in chronological order, keeping only the
    /// newest `capacity` of them.
    pub fn from_points<I>(capacity: usize, points: I) -> Self
    where
        I: IntoIterator<Item = HistoricalDataPoint>,
    {
        let mut buffer = Self::new(capacity);
        for p in points {
            buffer.push(p);
        }
        buffer
    }

    /// Append `point`, returning the evicted oldest point if the buffer was
    /// full.
    pub fn push(&mut self, point: HistoricalDataPoint) -> Option<HistoricalDataPoint> {
        let evicted = if self.points.len() == self.capacity {
            self.points.pop_front()
        } else {
            None
        };
        self.points.push_back(point);
        evicted
    }

    /// The newest `n` points (fewer if the buffer holds fewer), oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &HistoricalDataPoint> + '_ {
        self.points.iter().skip(self.points.len().saturating_sub(n))
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoricalDataPoint> + '_ {
        self.points.iter()
    }

    pub fn latest(&self) -> Option<&HistoricalDataPoint> {
        self.points.back()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
