//! Position ticker
//!
//! Cooperative periodic sampler used only while audio is playing. The
//! session starts and stops it on play/pause transitions; the host never
//! drives it directly.

use std::time::{Duration, Instant};

/// Default sampling interval (one position update per second)
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Periodic position sampler
///
/// Holds no timer thread; the owner calls [`poll`](PositionTicker::poll)
/// from its event loop with the current time. Stopping clears all state,
/// so there is nothing left dangling on pause, track change, or release.
#[derive(Debug, Clone)]
pub struct PositionTicker {
    interval: Duration,
    running: bool,
    last_tick: Option<Instant>,
}

impl PositionTicker {
    /// Create a ticker with the given sampling interval
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            running: false,
            last_tick: None,
        }
    }

    /// Sampling interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start sampling; the first sample falls one interval after the
    /// first poll. Starting an already-running ticker keeps its phase.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop sampling and clear the baseline
    pub fn stop(&mut self) {
        self.running = false;
        self.last_tick = None;
    }

    /// Whether the ticker is currently running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Report whether a sample is due at `now`
    ///
    /// The first poll after starting only records the baseline.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        match self.last_tick {
            None => {
                self.last_tick = Some(now);
                false
            }
            Some(last) if now.duration_since(last) >= self.interval => {
                self.last_tick = Some(now);
                true
            }
            Some(_) => false,
        }
    }
}

impl Default for PositionTicker {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}
