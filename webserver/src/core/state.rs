//! Process-wide interaction state
//!
//! Holds the two mutable scalars the live handlers work on: the poll counter
//! and the simulated temperature. One instance is owned by the server and
//! shared with handlers through an `Arc`.

use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tokio::sync::Mutex;

pub const INITIAL_TEMPERATURE: f64 = 20.0;

/// Largest magnitude of a single temperature step (exclusive upper bound)
pub const MAX_TEMPERATURE_STEP: f64 = 1.0;

#[derive(Debug)]
pub struct InteractionState {
    poll_counter: AtomicU64,
    temperature: Mutex<f64>,
    started_at: Instant,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::with_temperature(INITIAL_TEMPERATURE)
    }

    pub fn with_temperature(temperature: f64) -> Self {
        Self {
            poll_counter: AtomicU64::new(0),
            temperature: Mutex::new(temperature),
            started_at: Instant::now(),
        }
    }

    /// Increment the poll counter and return the new value
    pub fn record_poll(&self) -> u64 {
        self.poll_counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn poll_count(&self) -> u64 {
        self.poll_counter.load(Ordering::SeqCst)
    }

    /// Drift the temperature by a uniform random step in [-1.0, 1.0)
    pub async fn next_temperature(&self) -> f64 {
        let delta = rand::thread_rng().gen_range(-MAX_TEMPERATURE_STEP..MAX_TEMPERATURE_STEP);
        self.apply_temperature_delta(delta).await
    }

    /// Add `delta` to the temperature and return the new value. No clamping.
    pub async fn apply_temperature_delta(&self, delta: f64) -> f64 {
        let mut temperature = self.temperature.lock().await;
        *temperature += delta;
        *temperature
    }

    pub async fn temperature(&self) -> f64 {
        *self.temperature.lock().await
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a temperature reading, e.g. `20.4 ℃`
pub fn format_temperature(celsius: f64) -> String {
    format!("{celsius:.1} ℃")
}
