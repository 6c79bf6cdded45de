//! Lockable simulation handle for multi-threaded hosts.
//!
//! Every method takes the lock for exactly one state transition, so a UI
//! thread reading the forecast never sees a half-applied update.

use std::sync::{Arc, Mutex, MutexGuard};

use tf_core::{IncidentId, Timestamp};
use tf_forecast::{ForecastResult, TrafficKpis};
use tf_incident::ResponseSuggestion;

use crate::{SimError, SimObserver, SimResult, Simulation};

/// Cheaply cloneable handle to one [`Simulation`].
#[derive(Clone)]
pub struct SharedSimulation {
    inner: Arc<Mutex<Simulation>>,
}

impl SharedSimulation {
    pub fn new(sim: Simulation) -> Self {
        Self { inner: Arc::new(Mutex::new(sim)) }
    }

    fn lock(&self) -> SimResult<MutexGuard<'_, Simulation>> {
        self.inner.lock().map_err(|_| SimError::Poisoned)
    }

    /// Run `f` with exclusive access.
    pub fn with<R>(&self, f: impl FnOnce(&mut Simulation) -> R) -> SimResult<R> {
        let mut sim = self.lock()?;
        Ok(f(&mut *sim))
    }

    pub fn run_until<O: SimObserver>(&self, deadline: Timestamp, observer: &mut O) -> SimResult<usize> {
        Ok(self.lock()?.run_until(deadline, observer))
    }

    pub fn start(&self) -> SimResult<()> {
        self.lock()?.start();
        Ok(())
    }

    pub fn pause(&self) -> SimResult<()> {
        self.lock()?.pause();
        Ok(())
    }

    pub fn resume(&self, now: Timestamp) -> SimResult<()> {
        self.lock()?.resume(now);
        Ok(())
    }

    pub fn select_city(&self, city_key: &str) -> SimResult<()> {
        self.lock()?.select_city(city_key);
        Ok(())
    }

    pub fn reset(&self) -> SimResult<()> {
        self.lock()?.reset();
        Ok(())
    }

    pub fn remove_incident(&self, id: IncidentId) -> SimResult<bool> {
        Ok(self.lock()?.remove_incident(id))
    }

    pub fn forecast(&self) -> SimResult<ForecastResult> {
        Ok(self.lock()?.forecast())
    }

    pub fn kpis(&self) -> SimResult<TrafficKpis> {
        Ok(self.lock()?.kpis())
    }

    pub fn suggestions(&self, id: IncidentId) -> SimResult<Option<ResponseSuggestion>> {
        Ok(self.lock()?.suggestions(id))
    }
}
