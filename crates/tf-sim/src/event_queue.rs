//! The time-ordered event queue that drives the simulation.
//!
//! Intensity ticks, incident spawns, incident expiries, and history samples
//! are all entries in one `BTreeMap<Timestamp, VecDeque<SimEvent>>`.  The
//! runner pops the earliest entry, advances its clock to that timestamp, and
//! handles the event; recurring events push their own successor.
//!
//! Events sharing a timestamp are delivered in insertion order.  `BTreeMap`
//! gives O(log W) push and pop where W is the number of distinct pending
//! timestamps, which stays small: three recurring events plus one expiry per
//! active incident.

use std::collections::{BTreeMap, VecDeque};

use tf_core::{IncidentId, Timestamp};

/// Something the runner must do at a given instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SimEvent {
    /// Recompute every segment's intensity.  Recurring.
    UpdateTick,
    /// Generate one incident.  Recurring with random spacing.
    SpawnIncident,
    /// Remove an incident whose clearance time has been reached.  One-shot.
    ExpireIncident(IncidentId),
    /// Append one point to the rolling history.  Recurring.
    SampleHistory,
}

impl SimEvent {
    /// `true` for events that re-arm themselves and stop while paused.
    pub fn is_recurring(self) -> bool {
        !matches!(self, SimEvent::ExpireIncident(_))
    }
}

/// A priority queue mapping timestamps to the events due at that instant.
#[derive(Debug, Default)]
pub struct EventQueue {
    inner: BTreeMap<Timestamp, VecDeque<SimEvent>>,
    /// Cached total event count for O(1) `len()`.
    total: usize,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` at `at`, after any events already queued there.
    pub fn push(&mut self, at: Timestamp, event: SimEvent) {
        self.inner.entry(at).or_default().push_back(event);
        self.total += 1;
    }

    /// Remove and return the earliest event if it is due at or before
    /// `deadline`.
    pub fn pop_due(&mut self, deadline: Timestamp) -> Option<(Timestamp, SimEvent)> {
        let mut entry = self.inner.first_entry()?;
        let at = *entry.key();
        if at > deadline {
            return None;
        }
        let event = entry.get_mut().pop_front();
        if entry.get().is_empty() {
            entry.remove();
        }
        let event = event?;
        self.total -= 1;
        Some((at, event))
    }

    /// The earliest pending timestamp, or `None` if empty.
    pub fn next_time(&self) -> Option<Timestamp> {
        self.inner.keys().next().copied()
    }

    /// Keep only events for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(SimEvent) -> bool) {
        let mut total = 0;
        self.inner.retain(|_, events| {
            events.retain(|&e| keep(e));
            total += events.len();
            !events.is_empty()
        });
        self.total = total;
    }

    pub fn clear(&mut self) {
        self.inner.clear();
        self.total = 0;
    }

    /// Total number of pending events.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of pending events matching `pred`.
    pub fn count(&self, mut pred: impl FnMut(SimEvent) -> bool) -> usize {
        self.inner.values().flatten().filter(|&&e| pred(e)).count()
    }
}
